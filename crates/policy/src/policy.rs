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

use crate::error::Result;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Effect {
    #[default]
    Allow,
    Deny,
}

impl Effect {
    pub fn is_allowed(self) -> bool {
        matches!(self, Effect::Allow)
    }
}

/// An IAM policy document, as returned by the admin API for a user or group.
#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct Policy {
    #[serde(rename = "Version", default)]
    pub version: String,
    #[serde(rename = "Statement", default)]
    pub statements: Vec<Statement>,
}

#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct Statement {
    #[serde(rename = "Sid", default, skip_serializing_if = "String::is_empty")]
    pub sid: String,
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action", default, deserialize_with = "string_or_vec")]
    pub actions: Vec<String>,
}

impl Policy {
    pub fn parse(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }
}

/// Action strings granted by the `Allow` statements of `policy`, in document order.
///
/// ```text
/// {"Statement": [{"Effect": "Allow", "Action": ["admin:ServerInfo", "admin:GetUser"]},
///                {"Effect": "Allow", "Action": "s3:PutBucketNotification"}]}
/// ```
///
/// yields `["admin:ServerInfo", "admin:GetUser", "s3:PutBucketNotification"]`.
pub fn actions_from_policy(policy: &Policy) -> Vec<String> {
    policy
        .statements
        .iter()
        .filter(|statement| statement.effect.is_allowed())
        .flat_map(|statement| statement.actions.iter().cloned())
        .collect()
}

fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an array of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_owned()])
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut actions = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element::<String>()? {
                actions.push(value);
            }
            Ok(actions)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
