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

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// PBKDF2 rounds used for every console key.
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Length of a derived key in bytes.
pub const DERIVED_KEY_LEN: usize = 32;

/// Symmetric key derived from an operator passphrase and salt.
///
/// Computed once at startup and shared read-only afterwards. The bytes are
/// wiped when the last copy is dropped and never appear in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; DERIVED_KEY_LEN]);

impl DerivedKey {
    /// PBKDF2-HMAC-SHA1 over `passphrase` and `salt`, [`PBKDF2_ITERATIONS`] rounds.
    ///
    /// Deterministic: replicas configured with the same pair derive the same
    /// key and can read each other's tokens.
    pub fn derive(passphrase: &str, salt: &str) -> Self {
        let mut key = [0u8; DERIVED_KEY_LEN];
        pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), salt.as_bytes(), PBKDF2_ITERATIONS, &mut key);
        Self(key)
    }

    pub fn from_bytes(bytes: [u8; DERIVED_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key material, for use by the ciphers in this crate.
    pub fn as_bytes(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.0
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}

/// Shorthand for [`DerivedKey::derive`].
pub fn derive_key(passphrase: &str, salt: &str) -> DerivedKey {
    DerivedKey::derive(passphrase, salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_known_answer() {
        // RFC 6070: P = "password", S = "salt", c = 4096. The first 20 bytes of a
        // 32-byte output equal the 20-byte test vector.
        let key = derive_key("password", "salt");
        let hex = hex_simd::encode_to_string(&key.as_bytes()[..20], hex_simd::AsciiCase::Lower);
        assert_eq!(hex, "4b007901b765489abead49d926f721d065a429c1");
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        let first = derive_key("console-passphrase", "console-salt");
        let second = derive_key("console-passphrase", "console-salt");
        assert_eq!(first, second);
        assert_eq!(first.as_bytes().len(), DERIVED_KEY_LEN);
    }

    #[test]
    fn test_derive_key_depends_on_salt_and_passphrase() {
        let base = derive_key("console-passphrase", "salt-a");
        assert_ne!(base, derive_key("console-passphrase", "salt-b"));
        assert_ne!(base, derive_key("other-passphrase", "salt-a"));
    }

    #[test]
    fn test_derive_key_accepts_empty_inputs() {
        let key = derive_key("", "");
        assert_ne!(key.as_bytes(), &[0u8; DERIVED_KEY_LEN]);
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = DerivedKey::from_bytes([0xAB; DERIVED_KEY_LEN]);
        let debug = format!("{key:?}");
        assert_eq!(debug, "DerivedKey(<redacted>)");
    }
}
