// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Policy actions, IAM policy documents and the console endpoint ACL.

pub mod acl;
pub mod action;
mod error;
pub mod policy;

pub use acl::{AclMode, AuthorizationEngine, DisplayPredicate, EndpointRule, get_authorized_endpoints};
pub use action::{Action, ActionSet, AdminAction, S3Action};
pub use error::{Error, Result};
pub use policy::{Effect, Policy, Statement, actions_from_policy};
