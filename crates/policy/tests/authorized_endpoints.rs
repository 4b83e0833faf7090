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

use console_policy::acl::{endpoints::*, operator_rules, standard_rules};
use console_policy::{AclMode, AuthorizationEngine, get_authorized_endpoints};
use std::collections::HashSet;
use std::sync::Arc;
use test_case::test_case;

const OPEN: [&str; 5] = [
    SERVICE_ACCOUNTS,
    OBJECT_BROWSER,
    OBJECT_BROWSER_BUCKET,
    MAIN_OBJECT_BROWSER,
    LICENSE,
];

const ADMIN_SECTIONS: [&str; 12] = [
    CONFIGURATION,
    USERS,
    GROUPS,
    IAM_POLICIES,
    DASHBOARD,
    PROFILING,
    TRACE,
    LOGS,
    WATCH,
    HEAL,
    REMOTE_BUCKETS,
    REPLICATION,
];

const S3_SECTIONS: [&str; 3] = [NOTIFICATIONS, BUCKETS, BUCKETS_DETAIL];

const BUCKET_ACTIONS: [&str; 14] = [
    "s3:ListMultipartUploadParts",
    "s3:ListBucketMultipartUploads",
    "s3:ListBucket",
    "s3:HeadBucket",
    "s3:GetObject",
    "s3:GetBucketLocation",
    "s3:AbortMultipartUpload",
    "s3:CreateBucket",
    "s3:PutObject",
    "s3:DeleteObject",
    "s3:DeleteBucket",
    "s3:PutBucketPolicy",
    "s3:DeleteBucketPolicy",
    "s3:GetBucketPolicy",
];

fn set<'a>(parts: &[&[&'a str]]) -> HashSet<&'a str> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

fn standard() -> AuthorizationEngine {
    AuthorizationEngine::new(AclMode::Standard, Arc::new(|| false))
}

fn authorized(engine: &AuthorizationEngine, actions: &[&str]) -> HashSet<String> {
    engine.get_authorized_endpoints(actions).into_iter().collect()
}

fn as_owned(expected: HashSet<&str>) -> HashSet<String> {
    expected.into_iter().map(str::to_owned).collect()
}

#[test_case(&[] => set(&[&OPEN]); "no actions reach open sections only")]
#[test_case(&["admin:*"] => set(&[&OPEN, &ADMIN_SECTIONS]); "admin wildcard")]
#[test_case(&["s3:*"] => set(&[&OPEN, &S3_SECTIONS]); "s3 wildcard")]
#[test_case(&["admin:*", "s3:*"] => set(&[&OPEN, &ADMIN_SECTIONS, &S3_SECTIONS]); "both wildcards")]
#[test_case(&["admin:ServerInfo"] => set(&[&OPEN, &[DASHBOARD]]); "server info opens dashboard")]
#[test_case(&["admin:ConfigUpdate"] => set(&[&OPEN, &[CONFIGURATION, REMOTE_BUCKETS, REPLICATION]]); "config update")]
#[test_case(&["s3:ListenBucketNotification"] => set(&[&OPEN, &[WATCH]]); "watch needs listen only")]
#[test_case(
    &["s3:ListenBucketNotification", "s3:PutBucketNotification", "s3:GetBucketNotification"]
    => set(&[&OPEN, &[WATCH, NOTIFICATIONS]]);
    "notification actions"
)]
#[test_case(&BUCKET_ACTIONS => set(&[&OPEN, &[BUCKETS, BUCKETS_DETAIL]]); "explicit bucket actions")]
#[test_case(&BUCKET_ACTIONS[1..] => set(&[&OPEN]); "one bucket action short")]
#[test_case(&["admin:ListGroups", "admin:AddUserToGroup", "admin:EnableGroup", "admin:DisableGroup"] => set(&[&OPEN, &[GROUPS]]); "groups")]
#[test_case(&["kms:*", "sts:AssumeRole", "*"] => set(&[&OPEN]); "unknown actions grant nothing")]
fn test_standard_endpoints(actions: &[&str]) -> HashSet<&'static str> {
    let allowed = authorized(&standard(), actions);
    let expected: HashSet<&'static str> = standard_rules(Arc::new(|| false))
        .iter()
        .map(|rule| rule.endpoint())
        .filter(|endpoint| allowed.contains(*endpoint))
        .collect();
    assert_eq!(expected.len(), allowed.len(), "every returned endpoint is a registered one");
    expected
}

#[test]
fn test_duplicate_actions_are_harmless() {
    let engine = standard();
    assert_eq!(
        authorized(&engine, &["admin:ServerInfo", "admin:ServerInfo"]),
        authorized(&engine, &["admin:ServerInfo"])
    );
}

#[test]
fn test_authorization_is_monotonic() {
    let engine = standard();
    let chain: [&[&str]; 6] = [
        &[],
        &["admin:ServerInfo"],
        &["admin:ServerInfo", "s3:ListenBucketNotification"],
        &["admin:ServerInfo", "s3:ListenBucketNotification", "s3:*"],
        &["admin:ServerInfo", "s3:ListenBucketNotification", "s3:*", "admin:ConfigUpdate"],
        &["admin:ServerInfo", "s3:ListenBucketNotification", "s3:*", "admin:ConfigUpdate", "admin:*"],
    ];

    for pair in chain.windows(2) {
        let smaller = authorized(&engine, pair[0]);
        let larger = authorized(&engine, pair[1]);
        assert!(smaller.is_subset(&larger), "{:?} must be a subset of {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_operator_mode_is_isolated() {
    let operator = AuthorizationEngine::new(AclMode::OperatorOnly, Arc::new(|| false));
    let operator_endpoints: HashSet<_> = operator_rules().iter().map(|r| r.endpoint()).collect();
    let standard_endpoints: HashSet<_> = standard_rules(Arc::new(|| false)).iter().map(|r| r.endpoint()).collect();
    assert!(operator_endpoints.is_disjoint(&standard_endpoints));

    for actions in [&[][..], &["admin:*"][..], &["admin:*", "s3:*"][..]] {
        let from_operator = authorized(&operator, actions);
        assert_eq!(from_operator, as_owned(set(&[&[TENANTS, TENANTS_DETAIL]])));

        let from_standard = authorized(&standard(), actions);
        assert!(from_standard.iter().all(|e| !operator_endpoints.contains(e.as_str())));
    }
}

#[test]
fn test_directory_hides_identity_sections() {
    let engine = AuthorizationEngine::new(AclMode::Standard, Arc::new(|| true));
    let allowed = authorized(&engine, &["admin:*"]);
    let mut expected = set(&[&OPEN, &ADMIN_SECTIONS]);
    expected.remove(USERS);
    expected.remove(GROUPS);
    assert_eq!(allowed, as_owned(expected));
}

#[test]
fn test_free_function_uses_selected_table() {
    let allowed: HashSet<String> = get_authorized_endpoints(AclMode::OperatorOnly, ["s3:*"]).into_iter().collect();
    assert_eq!(allowed, as_owned(set(&[&[TENANTS, TENANTS_DETAIL]])));

    let allowed: HashSet<String> = get_authorized_endpoints(AclMode::Standard, Vec::<String>::new()).into_iter().collect();
    assert_eq!(allowed, as_owned(set(&[&OPEN])));
}
