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

//! Which console sections a caller may reach, given the actions they hold.
//!
//! Every endpoint carries a rule made of a type set (coarse wildcards such as
//! `admin:*`) and an explicit action set. A caller reaches the endpoint when
//! they hold every member of either set; an empty rule admits every caller.

use crate::action::{Action, ActionSet, AdminAction, S3Action};
use std::{fmt, sync::Arc};
use tracing::{debug, info};

pub mod endpoints {
    pub const CONFIGURATION: &str = "/configurations-list";
    pub const USERS: &str = "/users";
    pub const GROUPS: &str = "/groups";
    pub const IAM_POLICIES: &str = "/policies";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROFILING: &str = "/profiling";
    pub const TRACE: &str = "/trace";
    pub const LOGS: &str = "/logs";
    pub const WATCH: &str = "/watch";
    pub const NOTIFICATIONS: &str = "/notification-endpoints";
    pub const BUCKETS: &str = "/buckets";
    pub const BUCKETS_DETAIL: &str = "/buckets/:bucketName";
    pub const SERVICE_ACCOUNTS: &str = "/service-accounts";
    pub const HEAL: &str = "/heal";
    pub const REMOTE_BUCKETS: &str = "/remote-buckets";
    pub const REPLICATION: &str = "/replication";
    pub const OBJECT_BROWSER: &str = "/object-browser/:bucket/*";
    pub const OBJECT_BROWSER_BUCKET: &str = "/object-browser/:bucket";
    pub const MAIN_OBJECT_BROWSER: &str = "/object-browser";
    pub const LICENSE: &str = "/license";

    pub const TENANTS: &str = "/tenants";
    pub const TENANTS_DETAIL: &str = "/namespaces/:tenantNamespace/tenants/:tenantName";
}

/// Decides at query time whether an endpoint is shown at all.
pub type DisplayPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
pub struct EndpointRule {
    endpoint: &'static str,
    types: ActionSet,
    actions: ActionSet,
    display: Option<DisplayPredicate>,
}

impl EndpointRule {
    pub fn new<T, A>(endpoint: &'static str, types: T, actions: A) -> Self
    where
        T: IntoIterator<Item = Action>,
        A: IntoIterator<Item = Action>,
    {
        Self {
            endpoint,
            types: types.into_iter().collect(),
            actions: actions.into_iter().collect(),
            display: None,
        }
    }

    /// A rule every authenticated caller satisfies.
    pub fn open(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            types: ActionSet::default(),
            actions: ActionSet::default(),
            display: None,
        }
    }

    /// Hides the endpoint whenever `predicate` returns false.
    pub fn displayed_when(mut self, predicate: DisplayPredicate) -> Self {
        self.display = Some(predicate);
        self
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn is_displayed(&self) -> bool {
        self.display.as_ref().is_none_or(|predicate| predicate())
    }

    pub fn authorizes(&self, user: &ActionSet) -> bool {
        self.types.is_covered_by(user) || self.actions.is_covered_by(user)
    }
}

impl fmt::Debug for EndpointRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointRule")
            .field("endpoint", &self.endpoint)
            .field("types", &self.types)
            .field("actions", &self.actions)
            .field("has_display_predicate", &self.display.is_some())
            .finish()
    }
}

fn admin(actions: &[AdminAction]) -> Vec<Action> {
    actions.iter().copied().map(Action::from).collect()
}

fn s3(actions: &[S3Action]) -> Vec<Action> {
    actions.iter().copied().map(Action::from).collect()
}

/// Rules for a regular console deployment.
///
/// `directory_enabled` reports whether an external directory service manages
/// identities; users and groups are hidden while it does.
pub fn standard_rules(directory_enabled: DisplayPredicate) -> Vec<EndpointRule> {
    use AdminAction::*;
    use S3Action::*;
    use endpoints::*;

    let all_admin = || admin(&[AllAdminActions]);
    let all_s3 = || s3(&[AllActions]);
    let show_identities: DisplayPredicate = Arc::new(move || !directory_enabled());

    let buckets = s3(&[
        ListMultipartUploadPartsAction,
        ListBucketMultipartUploadsAction,
        ListBucketAction,
        HeadBucketAction,
        GetObjectAction,
        GetBucketLocationAction,
        AbortMultipartUploadAction,
        CreateBucketAction,
        PutObjectAction,
        DeleteObjectAction,
        DeleteBucketAction,
        PutBucketPolicyAction,
        DeleteBucketPolicyAction,
        GetBucketPolicyAction,
    ]);

    vec![
        EndpointRule::new(CONFIGURATION, all_admin(), admin(&[ConfigUpdateAdminAction])),
        EndpointRule::new(
            USERS,
            all_admin(),
            admin(&[
                ListUsersAdminAction,
                CreateUserAdminAction,
                DeleteUserAdminAction,
                GetUserAdminAction,
                EnableUserAdminAction,
                DisableUserAdminAction,
            ]),
        )
        .displayed_when(show_identities.clone()),
        EndpointRule::new(
            GROUPS,
            all_admin(),
            admin(&[
                ListGroupsAdminAction,
                AddUserToGroupAdminAction,
                EnableGroupAdminAction,
                DisableGroupAdminAction,
            ]),
        )
        .displayed_when(show_identities),
        EndpointRule::new(
            IAM_POLICIES,
            all_admin(),
            admin(&[
                GetPolicyAdminAction,
                DeletePolicyAdminAction,
                CreatePolicyAdminAction,
                AttachPolicyAdminAction,
                ListUserPoliciesAdminAction,
            ]),
        ),
        EndpointRule::new(DASHBOARD, all_admin(), admin(&[ServerInfoAdminAction])),
        EndpointRule::new(PROFILING, all_admin(), admin(&[ProfilingAdminAction])),
        EndpointRule::new(TRACE, all_admin(), admin(&[TraceAdminAction])),
        EndpointRule::new(LOGS, all_admin(), admin(&[ConsoleLogAdminAction])),
        EndpointRule::new(WATCH, all_admin(), s3(&[ListenBucketNotificationAction])),
        EndpointRule::new(
            NOTIFICATIONS,
            all_s3(),
            s3(&[
                ListenBucketNotificationAction,
                PutBucketNotificationAction,
                GetBucketNotificationAction,
            ]),
        ),
        EndpointRule::new(BUCKETS, all_s3(), buckets.clone()),
        EndpointRule::new(BUCKETS_DETAIL, all_s3(), buckets),
        EndpointRule::open(SERVICE_ACCOUNTS),
        EndpointRule::new(HEAL, all_admin(), admin(&[HealAdminAction])),
        EndpointRule::new(REMOTE_BUCKETS, all_admin(), admin(&[ConfigUpdateAdminAction])),
        EndpointRule::new(REPLICATION, all_admin(), admin(&[ConfigUpdateAdminAction])),
        EndpointRule::open(OBJECT_BROWSER),
        EndpointRule::open(MAIN_OBJECT_BROWSER),
        EndpointRule::open(OBJECT_BROWSER_BUCKET),
        EndpointRule::open(LICENSE),
    ]
}

/// Rules for an operator-only deployment, which manages tenants and nothing else.
pub fn operator_rules() -> Vec<EndpointRule> {
    vec![
        EndpointRule::open(endpoints::TENANTS),
        EndpointRule::open(endpoints::TENANTS_DETAIL),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclMode {
    Standard,
    OperatorOnly,
}

impl AclMode {
    pub fn from_operator_flag(operator_mode: bool) -> Self {
        if operator_mode { Self::OperatorOnly } else { Self::Standard }
    }
}

/// Immutable endpoint table, built once at startup and shared by all requests.
#[derive(Debug, Clone)]
pub struct AuthorizationEngine {
    mode: AclMode,
    rules: Vec<EndpointRule>,
}

impl AuthorizationEngine {
    /// Selects exactly one rule table for `mode`.
    pub fn new(mode: AclMode, directory_enabled: DisplayPredicate) -> Self {
        let rules = match mode {
            AclMode::Standard => standard_rules(directory_enabled),
            AclMode::OperatorOnly => operator_rules(),
        };
        Self::with_rules(mode, rules)
    }

    pub fn with_rules(mode: AclMode, rules: Vec<EndpointRule>) -> Self {
        info!(mode = ?mode, rules = rules.len(), "console endpoint rules loaded");
        Self { mode, rules }
    }

    pub fn mode(&self) -> AclMode {
        self.mode
    }

    pub fn rules(&self) -> &[EndpointRule] {
        &self.rules
    }

    /// Endpoints reachable with `actions`, in table order.
    pub fn authorized_endpoints(&self, actions: &ActionSet) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| {
                if !rule.is_displayed() {
                    debug!(endpoint = rule.endpoint, "endpoint hidden by display predicate");
                    return false;
                }
                rule.authorizes(actions)
            })
            .map(EndpointRule::endpoint)
            .collect()
    }

    /// String-in, string-out form of [`Self::authorized_endpoints`].
    pub fn get_authorized_endpoints<I, S>(&self, actions: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let actions = ActionSet::from_strings(actions);
        self.authorized_endpoints(&actions).into_iter().map(str::to_owned).collect()
    }
}

/// Evaluates `actions` against the table for `mode` with no display predicates hiding anything.
pub fn get_authorized_endpoints<I, S>(mode: AclMode, actions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AuthorizationEngine::new(mode, Arc::new(|| false)).get_authorized_endpoints(actions)
}
