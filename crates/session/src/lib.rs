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

//! Console sessions: opaque credential tokens, OAuth2 state signing, request
//! token extraction and the [`ConsoleAuth`] facade tying them to the ACL.

mod auth;
mod claims;
mod cookie;
mod error;
mod extract;
mod state;
mod token;

pub use auth::ConsoleAuth;
pub use claims::{Credentials, SessionClaims};
pub use cookie::{expire_session_cookie, new_session_cookie, new_session_cookie_at};
pub use error::{Error, Result};
pub use extract::{RequestCookie, TokenCarrier, extract_token, extract_token_at};
pub use state::{DEFAULT_STATE_LENGTH, StateSigner};
pub use token::SessionTokenCodec;
