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

use crate::claims::{Credentials, SessionClaims};
use crate::cookie::{expire_session_cookie, new_session_cookie};
use crate::error::Result;
use crate::extract::{TokenCarrier, extract_token};
use crate::state::StateSigner;
use crate::token::SessionTokenCodec;
use console_config::ConsoleConfig;
use console_crypto::{AeadCodec, DerivedKey};
use console_policy::{AclMode, AuthorizationEngine};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

/// The console's session and authorization core, wired from one [`ConsoleConfig`].
///
/// Keys are derived once here; every method afterwards only reads shared
/// immutable state and is safe to call from any number of request handlers.
#[derive(Debug, Clone)]
pub struct ConsoleAuth {
    tokens: SessionTokenCodec,
    states: StateSigner,
    acl: AuthorizationEngine,
    session_duration: Duration,
    secure_cookies: bool,
}

impl ConsoleAuth {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        let session_key = DerivedKey::derive(&config.pbkdf_passphrase, &config.pbkdf_salt);
        let state_key = DerivedKey::derive(&config.idp_hmac_passphrase, &config.idp_hmac_salt);
        let codec = AeadCodec::new(session_key);
        info!(algorithm = ?codec.algorithm(), "console session keys derived");

        let ldap_enabled = config.ldap_enabled;
        let acl = AuthorizationEngine::new(AclMode::from_operator_flag(config.operator_mode), Arc::new(move || ldap_enabled));

        Self::with_parts(SessionTokenCodec::with_codec(codec), StateSigner::new(state_key), acl)
            .session_duration(config.session_duration)
            .secure_cookies(config.secure_cookies)
    }

    pub fn with_parts(tokens: SessionTokenCodec, states: StateSigner, acl: AuthorizationEngine) -> Self {
        Self {
            tokens,
            states,
            acl,
            session_duration: Duration::from_secs(3600),
            secure_cookies: false,
        }
    }

    pub fn session_duration(mut self, duration: Duration) -> Self {
        self.session_duration = duration;
        self
    }

    pub fn secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub fn tokens(&self) -> &SessionTokenCodec {
        &self.tokens
    }

    pub fn acl(&self) -> &AuthorizationEngine {
        &self.acl
    }

    /// Issues a session token and the `Set-Cookie` value that carries it.
    #[instrument(skip_all, fields(access_key = %credentials.access_key_id))]
    pub fn login(&self, credentials: Credentials, account_access_key: &str, actions: Vec<String>) -> Result<(String, String)> {
        let claims = SessionClaims::new(credentials, account_access_key, actions);
        let token = self.tokens.encode(&claims)?;
        let cookie = new_session_cookie(&token, self.session_duration, self.secure_cookies)?;
        Ok((token, cookie))
    }

    /// Claims of the session the request carries.
    #[instrument(skip_all)]
    pub fn authenticate<C: TokenCarrier + ?Sized>(&self, carrier: &C) -> Result<SessionClaims> {
        let token = extract_token(carrier)?;
        self.tokens.decode(token)
    }

    /// Console sections the session may open.
    pub fn authorized_endpoints(&self, claims: &SessionClaims) -> Vec<String> {
        self.acl.get_authorized_endpoints(&claims.actions)
    }

    pub fn new_state(&self) -> String {
        self.states.new_state()
    }

    #[instrument(skip_all)]
    pub fn validate_state(&self, state: &str) -> Result<()> {
        self.states.validate(state)
    }

    pub fn login_url(&self, authorization_endpoint: &str, client_id: &str, redirect_uri: &str, scopes: &[&str]) -> Result<(Url, String)> {
        self.states.login_url(authorization_endpoint, client_id, redirect_uri, scopes)
    }

    pub fn logout_cookie(&self) -> String {
        expire_session_cookie(self.secure_cookies)
    }
}
