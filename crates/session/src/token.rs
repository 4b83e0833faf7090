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

use crate::claims::SessionClaims;
use crate::error::{Error, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use console_crypto::{AeadCodec, DerivedKey};
use tracing::debug;

/// Turns claims into an opaque, tamper-evident browser token and back.
///
/// `base64(AEAD(json(claims)))`. Holds no session table: the token is the
/// session, and its lifetime is enforced by the cookie that carries it.
#[derive(Debug, Clone)]
pub struct SessionTokenCodec {
    codec: AeadCodec,
}

impl SessionTokenCodec {
    pub fn new(key: DerivedKey) -> Self {
        Self::with_codec(AeadCodec::new(key))
    }

    pub fn with_codec(codec: AeadCodec) -> Self {
        Self { codec }
    }

    pub fn encode(&self, claims: &SessionClaims) -> Result<String> {
        if claims.credentials().is_empty() {
            return Err(Error::EmptyCredentials);
        }
        let payload = serde_json::to_vec(claims)?;
        let ciphertext = self.codec.encrypt(&payload, &[])?;
        Ok(STANDARD.encode(ciphertext))
    }

    /// Recovers the claims from a token.
    ///
    /// Returns [`Error::MissingToken`] for an empty token and
    /// [`Error::MalformedToken`] for anything else that does not decode.
    pub fn decode(&self, token: &str) -> Result<SessionClaims> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::MissingToken);
        }

        let ciphertext = STANDARD.decode(token).map_err(|err| {
            debug!(error = %err, "session token is not base64");
            Error::MalformedToken
        })?;
        let payload = self.codec.decrypt(&ciphertext, &[]).map_err(|_| Error::MalformedToken)?;
        serde_json::from_slice(&payload).map_err(|err| {
            debug!(error = %err, "session token payload is not a claim set");
            Error::MalformedToken
        })
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }
}
