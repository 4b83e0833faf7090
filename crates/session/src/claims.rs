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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temporary storage credentials obtained at login.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_key_id.is_empty() || self.secret_access_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .finish()
    }
}

/// Everything a session token carries. Immutable once issued.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "stsAccessKeyID")]
    pub sts_access_key_id: String,
    #[serde(rename = "stsSecretAccessKey")]
    pub sts_secret_access_key: String,
    #[serde(rename = "stsSessionToken")]
    pub sts_session_token: String,
    #[serde(rename = "accountAccessKey", default)]
    pub account_access_key: String,
    #[serde(rename = "actions", default)]
    pub actions: Vec<String>,
}

impl SessionClaims {
    pub fn new(credentials: Credentials, account_access_key: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            sts_access_key_id: credentials.access_key_id,
            sts_secret_access_key: credentials.secret_access_key,
            sts_session_token: credentials.session_token,
            account_access_key: account_access_key.into(),
            actions,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.sts_access_key_id.clone(),
            self.sts_secret_access_key.clone(),
            self.sts_session_token.clone(),
        )
    }
}

impl fmt::Debug for SessionClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClaims")
            .field("sts_access_key_id", &self.sts_access_key_id)
            .field("sts_secret_access_key", &"<redacted>")
            .field("sts_session_token", &"<redacted>")
            .field("account_access_key", &self.account_access_key)
            .field("actions", &self.actions)
            .finish()
    }
}
