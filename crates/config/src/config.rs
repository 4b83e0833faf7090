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

use crate::envs::{get_env_bool, get_env_opt_str, get_env_str};
use crate::error::{Error, Result};
use crate::{
    DEFAULT_CONSOLE_LDAP_ENABLED, DEFAULT_CONSOLE_OPERATOR_MODE, DEFAULT_CONSOLE_SECURE_COOKIES, DEFAULT_CONSOLE_STS_DURATION,
    DEFAULT_PBKDF_PASSPHRASE_LENGTH, DEFAULT_PBKDF_SALT_LENGTH, ENV_CONSOLE_IDP_HMAC_PASSPHRASE, ENV_CONSOLE_IDP_HMAC_SALT,
    ENV_CONSOLE_LDAP_ENABLED, ENV_CONSOLE_OPERATOR_MODE, ENV_CONSOLE_PBKDF_PASSPHRASE, ENV_CONSOLE_PBKDF_SALT,
    ENV_CONSOLE_SECURE_COOKIES, ENV_CONSOLE_STS_DURATION, RANDOM_CHAR_ALPHABET,
};
use rand::RngCore;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Settings consumed by the console session and authorization core.
///
/// Built once at startup and handed to each component by value; nothing in
/// the core reads the environment after construction.
#[derive(Clone)]
pub struct ConsoleConfig {
    /// Passphrase for the session token key.
    pub pbkdf_passphrase: String,
    /// Salt for the session token key.
    pub pbkdf_salt: String,
    /// Passphrase for the OAuth2 state signing key.
    pub idp_hmac_passphrase: String,
    /// Salt for the OAuth2 state signing key.
    pub idp_hmac_salt: String,
    /// Lifetime of an issued session cookie.
    pub session_duration: Duration,
    /// Whether session cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
    /// Serve the operator endpoint table instead of the standard one.
    pub operator_mode: bool,
    /// An external directory service manages users and groups.
    pub ldap_enabled: bool,
}

impl ConsoleConfig {
    /// Creates a configuration with pinned secrets; both keys derive from the
    /// same passphrase and salt.
    pub fn with_secrets(passphrase: impl Into<String>, salt: impl Into<String>) -> Self {
        let passphrase = passphrase.into();
        let salt = salt.into();
        Self {
            idp_hmac_passphrase: passphrase.clone(),
            idp_hmac_salt: salt.clone(),
            pbkdf_passphrase: passphrase,
            pbkdf_salt: salt,
            session_duration: parse_session_duration(DEFAULT_CONSOLE_STS_DURATION),
            secure_cookies: DEFAULT_CONSOLE_SECURE_COOKIES,
            operator_mode: DEFAULT_CONSOLE_OPERATOR_MODE,
            ldap_enabled: DEFAULT_CONSOLE_LDAP_ENABLED,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Unset passphrase or salt fall back to random values, which means
    /// tokens issued by this process are unreadable by any other instance and
    /// by this one after a restart.
    pub fn from_env() -> Result<Self> {
        let pbkdf_passphrase = get_env_opt_str(ENV_CONSOLE_PBKDF_PASSPHRASE).unwrap_or_else(|| {
            warn!("{ENV_CONSOLE_PBKDF_PASSPHRASE} is not set, using a random passphrase; sessions will not survive a restart");
            random_char_string(DEFAULT_PBKDF_PASSPHRASE_LENGTH)
        });
        let pbkdf_salt = get_env_opt_str(ENV_CONSOLE_PBKDF_SALT).unwrap_or_else(|| {
            warn!("{ENV_CONSOLE_PBKDF_SALT} is not set, using a random salt; sessions will not survive a restart");
            random_char_string(DEFAULT_PBKDF_SALT_LENGTH)
        });

        let idp_hmac_passphrase = get_env_opt_str(ENV_CONSOLE_IDP_HMAC_PASSPHRASE).unwrap_or_else(|| pbkdf_passphrase.clone());
        let idp_hmac_salt = get_env_opt_str(ENV_CONSOLE_IDP_HMAC_SALT).unwrap_or_else(|| pbkdf_salt.clone());

        let raw_duration = get_env_str(ENV_CONSOLE_STS_DURATION, DEFAULT_CONSOLE_STS_DURATION);
        let session_duration = humantime::parse_duration(raw_duration.trim()).map_err(|source| Error::InvalidDuration {
            key: ENV_CONSOLE_STS_DURATION,
            value: raw_duration.clone(),
            source,
        })?;

        Ok(Self {
            pbkdf_passphrase,
            pbkdf_salt,
            idp_hmac_passphrase,
            idp_hmac_salt,
            session_duration,
            secure_cookies: get_env_bool(ENV_CONSOLE_SECURE_COOKIES, DEFAULT_CONSOLE_SECURE_COOKIES),
            operator_mode: get_env_bool(ENV_CONSOLE_OPERATOR_MODE, DEFAULT_CONSOLE_OPERATOR_MODE),
            ldap_enabled: get_env_bool(ENV_CONSOLE_LDAP_ENABLED, DEFAULT_CONSOLE_LDAP_ENABLED),
        })
    }
}

impl Default for ConsoleConfig {
    /// Random secrets, default toggles.
    fn default() -> Self {
        Self::with_secrets(
            random_char_string(DEFAULT_PBKDF_PASSPHRASE_LENGTH),
            random_char_string(DEFAULT_PBKDF_SALT_LENGTH),
        )
    }
}

impl fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("pbkdf_passphrase", &"<redacted>")
            .field("pbkdf_salt", &"<redacted>")
            .field("idp_hmac_passphrase", &"<redacted>")
            .field("idp_hmac_salt", &"<redacted>")
            .field("session_duration", &self.session_duration)
            .field("secure_cookies", &self.secure_cookies)
            .field("operator_mode", &self.operator_mode)
            .field("ldap_enabled", &self.ldap_enabled)
            .finish()
    }
}

// DEFAULT_CONSOLE_STS_DURATION is a literal that always parses.
fn parse_session_duration(value: &str) -> Duration {
    humantime::parse_duration(value).unwrap_or(Duration::from_secs(3600))
}

/// Draws `length` characters from [`RANDOM_CHAR_ALPHABET`] using the thread-local CSPRNG.
pub fn random_char_string(length: usize) -> String {
    let alphabet = RANDOM_CHAR_ALPHABET.as_bytes();
    let mut random = vec![0u8; length];
    rand::rng().fill_bytes(&mut random);
    random
        .iter()
        .map(|b| alphabet[usize::from(*b) % alphabet.len()] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_KEYS: [&str; 8] = [
        ENV_CONSOLE_PBKDF_PASSPHRASE,
        ENV_CONSOLE_PBKDF_SALT,
        ENV_CONSOLE_IDP_HMAC_PASSPHRASE,
        ENV_CONSOLE_IDP_HMAC_SALT,
        ENV_CONSOLE_STS_DURATION,
        ENV_CONSOLE_SECURE_COOKIES,
        ENV_CONSOLE_OPERATOR_MODE,
        ENV_CONSOLE_LDAP_ENABLED,
    ];

    #[test]
    fn test_random_char_string_uses_alphabet() {
        let value = random_char_string(64);
        assert_eq!(value.len(), 64);
        assert!(value.chars().all(|c| RANDOM_CHAR_ALPHABET.contains(c)));
        assert_eq!(random_char_string(0), "");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(ALL_KEYS, || {
            let config = ConsoleConfig::from_env().expect("defaults should load");
            assert_eq!(config.pbkdf_passphrase.len(), DEFAULT_PBKDF_PASSPHRASE_LENGTH);
            assert_eq!(config.pbkdf_salt.len(), DEFAULT_PBKDF_SALT_LENGTH);
            assert_eq!(config.idp_hmac_passphrase, config.pbkdf_passphrase);
            assert_eq!(config.idp_hmac_salt, config.pbkdf_salt);
            assert_eq!(config.session_duration, Duration::from_secs(3600));
            assert!(!config.operator_mode);
            assert!(!config.ldap_enabled);
            assert!(!config.secure_cookies);
        });
    }

    #[test]
    #[serial]
    fn test_from_env_pinned_values() {
        temp_env::with_vars(
            [
                (ENV_CONSOLE_PBKDF_PASSPHRASE, Some("passphrase")),
                (ENV_CONSOLE_PBKDF_SALT, Some("salt")),
                (ENV_CONSOLE_IDP_HMAC_PASSPHRASE, Some("idp-passphrase")),
                (ENV_CONSOLE_IDP_HMAC_SALT, None),
                (ENV_CONSOLE_STS_DURATION, Some("12h")),
                (ENV_CONSOLE_SECURE_COOKIES, Some("true")),
                (ENV_CONSOLE_OPERATOR_MODE, Some("on")),
                (ENV_CONSOLE_LDAP_ENABLED, Some("off")),
            ],
            || {
                let config = ConsoleConfig::from_env().expect("pinned values should load");
                assert_eq!(config.pbkdf_passphrase, "passphrase");
                assert_eq!(config.pbkdf_salt, "salt");
                assert_eq!(config.idp_hmac_passphrase, "idp-passphrase");
                assert_eq!(config.idp_hmac_salt, "salt");
                assert_eq!(config.session_duration, Duration::from_secs(12 * 3600));
                assert!(config.secure_cookies);
                assert!(config.operator_mode);
                assert!(!config.ldap_enabled);
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_duration() {
        temp_env::with_var(ENV_CONSOLE_STS_DURATION, Some("forever"), || {
            let err = ConsoleConfig::from_env().expect_err("invalid duration must fail");
            assert!(matches!(err, Error::InvalidDuration { key, .. } if key == ENV_CONSOLE_STS_DURATION));
        });
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ConsoleConfig::with_secrets("top-secret-passphrase", "top-secret-salt");
        let debug = format!("{config:?}");
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("ConsoleConfig"));
    }
}
