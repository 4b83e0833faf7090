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

use serde::{Serialize, Serializer, ser::SerializeSeq};
use std::{collections::HashSet, ops::Deref};
use strum::{EnumString, IntoStaticStr};
use tracing::debug;

/// A policy action the console knows how to reason about.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Action {
    S3Action(S3Action),
    AdminAction(AdminAction),
}

impl Action {
    const S3_PREFIX: &'static str = "s3:";
    const ADMIN_PREFIX: &'static str = "admin:";

    /// Parses a policy action string, `None` when the console has no use for it.
    pub fn parse(value: &str) -> Option<Self> {
        if value.starts_with(Self::S3_PREFIX) {
            S3Action::try_from(value).ok().map(Self::S3Action)
        } else if value.starts_with(Self::ADMIN_PREFIX) {
            AdminAction::try_from(value).ok().map(Self::AdminAction)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl From<&Action> for &str {
    fn from(value: &Action) -> &'static str {
        match value {
            Action::S3Action(s) => s.into(),
            Action::AdminAction(s) => s.into(),
        }
    }
}

impl From<S3Action> for Action {
    fn from(value: S3Action) -> Self {
        Self::S3Action(value)
    }
}

impl From<AdminAction> for Action {
    fn from(value: AdminAction) -> Self {
        Self::AdminAction(value)
    }
}

#[derive(Hash, PartialEq, Eq, Clone, EnumString, IntoStaticStr, Debug, Copy)]
pub enum S3Action {
    #[strum(serialize = "s3:*")]
    AllActions,
    #[strum(serialize = "s3:AbortMultipartUpload")]
    AbortMultipartUploadAction,
    #[strum(serialize = "s3:CreateBucket")]
    CreateBucketAction,
    #[strum(serialize = "s3:DeleteBucket")]
    DeleteBucketAction,
    #[strum(serialize = "s3:DeleteBucketPolicy")]
    DeleteBucketPolicyAction,
    #[strum(serialize = "s3:DeleteObject")]
    DeleteObjectAction,
    #[strum(serialize = "s3:GetBucketLocation")]
    GetBucketLocationAction,
    #[strum(serialize = "s3:GetBucketNotification")]
    GetBucketNotificationAction,
    #[strum(serialize = "s3:GetBucketPolicy")]
    GetBucketPolicyAction,
    #[strum(serialize = "s3:GetObject")]
    GetObjectAction,
    #[strum(serialize = "s3:HeadBucket")]
    HeadBucketAction,
    #[strum(serialize = "s3:ListAllMyBuckets")]
    ListAllMyBucketsAction,
    #[strum(serialize = "s3:ListBucket")]
    ListBucketAction,
    #[strum(serialize = "s3:ListBucketMultipartUploads")]
    ListBucketMultipartUploadsAction,
    #[strum(serialize = "s3:ListenBucketNotification")]
    ListenBucketNotificationAction,
    #[strum(serialize = "s3:ListMultipartUploadParts")]
    ListMultipartUploadPartsAction,
    #[strum(serialize = "s3:PutBucketNotification")]
    PutBucketNotificationAction,
    #[strum(serialize = "s3:PutBucketPolicy")]
    PutBucketPolicyAction,
    #[strum(serialize = "s3:PutObject")]
    PutObjectAction,
}

// AdminAction - admin policy action.
#[derive(Hash, PartialEq, Eq, Clone, EnumString, IntoStaticStr, Debug, Copy)]
pub enum AdminAction {
    #[strum(serialize = "admin:*")]
    AllAdminActions,
    #[strum(serialize = "admin:Heal")]
    HealAdminAction,
    #[strum(serialize = "admin:Profiling")]
    ProfilingAdminAction,
    #[strum(serialize = "admin:ServerTrace")]
    TraceAdminAction,
    #[strum(serialize = "admin:ConsoleLog")]
    ConsoleLogAdminAction,
    #[strum(serialize = "admin:ServerInfo")]
    ServerInfoAdminAction,
    #[strum(serialize = "admin:ConfigUpdate")]
    ConfigUpdateAdminAction,
    #[strum(serialize = "admin:CreateUser")]
    CreateUserAdminAction,
    #[strum(serialize = "admin:DeleteUser")]
    DeleteUserAdminAction,
    #[strum(serialize = "admin:ListUsers")]
    ListUsersAdminAction,
    #[strum(serialize = "admin:EnableUser")]
    EnableUserAdminAction,
    #[strum(serialize = "admin:DisableUser")]
    DisableUserAdminAction,
    #[strum(serialize = "admin:GetUser")]
    GetUserAdminAction,
    #[strum(serialize = "admin:AddUserToGroup")]
    AddUserToGroupAdminAction,
    #[strum(serialize = "admin:RemoveUserFromGroup")]
    RemoveUserFromGroupAdminAction,
    #[strum(serialize = "admin:GetGroup")]
    GetGroupAdminAction,
    #[strum(serialize = "admin:ListGroups")]
    ListGroupsAdminAction,
    #[strum(serialize = "admin:EnableGroup")]
    EnableGroupAdminAction,
    #[strum(serialize = "admin:DisableGroup")]
    DisableGroupAdminAction,
    #[strum(serialize = "admin:CreatePolicy")]
    CreatePolicyAdminAction,
    #[strum(serialize = "admin:DeletePolicy")]
    DeletePolicyAdminAction,
    #[strum(serialize = "admin:GetPolicy")]
    GetPolicyAdminAction,
    #[strum(serialize = "admin:AttachUserOrGroupPolicy")]
    AttachPolicyAdminAction,
    #[strum(serialize = "admin:ListUserPolicies")]
    ListUserPoliciesAdminAction,
}

/// A deduplicated set of actions.
///
/// Membership is exact: `admin:*` is a member in its own right and does not
/// expand to the individual admin actions.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ActionSet(HashSet<Action>);

impl ActionSet {
    /// Builds a set from policy action strings. Strings that name no known
    /// action cannot satisfy any endpoint rule and are dropped.
    pub fn from_strings<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for action in actions {
            let action = action.as_ref();
            match Action::parse(action) {
                Some(parsed) => {
                    set.insert(parsed);
                }
                None => debug!(action, "ignoring unrecognised action"),
            }
        }
        Self(set)
    }

    /// Number of members shared with `other`.
    pub fn intersection_len(&self, other: &ActionSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Whether `other` holds every member of this set.
    pub fn is_covered_by(&self, other: &ActionSet) -> bool {
        self.intersection_len(other) == self.0.len()
    }
}

impl Deref for ActionSet {
    type Target = HashSet<Action>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ActionSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for action in &self.0 {
            seq.serialize_element(action.as_str())?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        assert_eq!(Action::parse("s3:*"), Some(Action::S3Action(S3Action::AllActions)));
        assert_eq!(Action::parse("admin:*"), Some(Action::AdminAction(AdminAction::AllAdminActions)));
        assert_eq!(
            Action::parse("admin:AttachUserOrGroupPolicy"),
            Some(Action::AdminAction(AdminAction::AttachPolicyAdminAction))
        );
        assert_eq!(Action::parse("s3:GetObject").map(|a| a.as_str()), Some("s3:GetObject"));
    }

    #[test]
    fn test_parse_unknown_actions() {
        assert_eq!(Action::parse("s3:NoSuchAction"), None);
        assert_eq!(Action::parse("kms:CreateKey"), None);
        assert_eq!(Action::parse("*"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn test_from_strings_dedups_and_drops_unknown() {
        let set = ActionSet::from_strings(["admin:ServerInfo", "admin:ServerInfo", "bogus", "s3:PutObject"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Action::AdminAction(AdminAction::ServerInfoAdminAction)));
        assert!(set.contains(&Action::S3Action(S3Action::PutObjectAction)));
    }

    #[test]
    fn test_coverage_is_exact_membership() {
        let required: ActionSet = [AdminAction::ServerInfoAdminAction.into()].into_iter().collect();
        let wildcard = ActionSet::from_strings(["admin:*"]);
        assert!(!required.is_covered_by(&wildcard));
        assert!(ActionSet::default().is_covered_by(&wildcard));

        let wildcard_rule: ActionSet = [AdminAction::AllAdminActions.into()].into_iter().collect();
        assert!(wildcard_rule.is_covered_by(&wildcard));
        assert_eq!(wildcard_rule.intersection_len(&wildcard), 1);
    }

    #[test]
    fn test_serialize_as_array() {
        let set = ActionSet::from_strings(["s3:GetObject"]);
        assert_eq!(serde_json::to_string(&set).expect("serialize"), r#"["s3:GetObject"]"#);
        assert_eq!(serde_json::to_string(&ActionSet::default()).expect("serialize"), "[]");
    }
}
