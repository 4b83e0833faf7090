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

//! CSRF protection for the federated login redirect.
//!
//! The `state` parameter is `base64("<random>:<hex hmac-sha256(random)>")`.
//! Nothing is stored server side; a callback's state is valid when its MAC
//! recomputes under the same key.

use crate::error::{Error, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use console_config::random_char_string;
use console_crypto::DerivedKey;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;
use url::Url;

/// Random characters in a state drawn by [`StateSigner::new_state`].
pub const DEFAULT_STATE_LENGTH: usize = 25;

/// Why a state was refused. Logged, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateRejection {
    Shape,
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct StateSigner {
    key: DerivedKey,
}

impl StateSigner {
    pub fn new(key: DerivedKey) -> Self {
        Self { key }
    }

    pub fn new_state(&self) -> String {
        self.new_state_with_length(DEFAULT_STATE_LENGTH)
    }

    pub fn new_state_with_length(&self, length: usize) -> String {
        let state = random_char_string(length);
        let mac = self.sign(&state);
        STANDARD.encode(format!("{state}:{mac}"))
    }

    /// Accepts a state exactly as it came back on the callback query string.
    pub fn validate(&self, state: &str) -> Result<()> {
        self.check(state).map_err(|rejection| {
            debug!(reason = ?rejection, "rejected oauth2 state");
            Error::InvalidState
        })
    }

    /// Authorization URL for the identity provider, with a fresh state.
    ///
    /// Returns the URL and the state it carries.
    pub fn login_url(&self, authorization_endpoint: &str, client_id: &str, redirect_uri: &str, scopes: &[&str]) -> Result<(Url, String)> {
        let state = self.new_state();
        let mut url = Url::parse(authorization_endpoint)?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", &scopes.join(" "))
            .append_pair("state", &state);
        Ok((url, state))
    }

    fn sign(&self, message: &str) -> String {
        // HMAC accepts keys of any length.
        let mut mac = match <Hmac<Sha256> as Mac>::new_from_slice(self.key.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return String::new(),
        };
        mac.update(message.as_bytes());
        hex_simd::encode_to_string(mac.finalize().into_bytes(), hex_simd::AsciiCase::Lower)
    }

    fn check(&self, state: &str) -> core::result::Result<(), StateRejection> {
        let unescaped = urlencoding::decode(state).map_err(|_| StateRejection::Shape)?;
        let decoded = STANDARD.decode(unescaped.as_bytes()).map_err(|_| StateRejection::Shape)?;
        let decoded = String::from_utf8(decoded).map_err(|_| StateRejection::Shape)?;

        let parts: Vec<&str> = decoded.split(':').collect();
        let [random, mac] = parts.as_slice() else {
            return Err(StateRejection::Shape);
        };

        let expected = self.sign(random);
        if expected.is_empty() || !bool::from(expected.as_bytes().ct_eq(mac.as_bytes())) {
            return Err(StateRejection::Mismatch);
        }
        Ok(())
    }
}
