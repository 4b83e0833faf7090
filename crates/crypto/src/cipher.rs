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

//! The cipher strategy used by [`crate::AeadCodec`].

use crate::encdec::id::AlgorithmId;
use crate::error::{Error, Result};
use crate::kdf::{DERIVED_KEY_LEN, DerivedKey};
use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead, AeadCore, Nonce, Payload};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroizing;

/// Length of the per-envelope IV the sealing key is derived from.
pub const IV_LEN: usize = 16;

/// Nonce length shared by AES-256-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN: usize = 12;

/// Authentication tag appended to every sealed payload.
pub const TAG_LEN: usize = 16;

/// An AEAD algorithm that can seal and open envelope payloads.
///
/// Implementations are stateless; the per-envelope sealing key is passed in.
pub trait AeadCipher: Send + Sync {
    /// Identifier written in the first byte of the envelope.
    fn algorithm(&self) -> AlgorithmId;

    /// Nonce length this algorithm requires.
    fn nonce_size(&self) -> usize {
        NONCE_LEN
    }

    /// Fresh random nonce from the OS CSPRNG.
    fn generate_nonce(&self) -> Vec<u8>;

    fn seal(&self, key: &[u8; DERIVED_KEY_LEN], nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;

    fn open(&self, key: &[u8; DERIVED_KEY_LEN], nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>>;
}

/// HMAC-SHA256(master, iv): the key a single envelope is sealed with.
pub fn sealing_key(master: &DerivedKey, iv: &[u8; IV_LEN]) -> Result<Zeroizing<[u8; DERIVED_KEY_LEN]>> {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(master.as_bytes())?;
    mac.update(iv);
    Ok(Zeroizing::new(mac.finalize().into_bytes().into()))
}

/// Whether the CPU has the instructions AES-GCM needs to run in constant time.
pub fn native_aes() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("aes") && std::arch::is_x86_feature_detected!("pclmulqdq")
    }

    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("aes")
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
    {
        false
    }
}

fn check_nonce<T: AeadCore>(nonce: &[u8]) -> Result<()> {
    let expected = <T as AeadCore>::NonceSize::USIZE;
    if nonce.len() != expected {
        return Err(Error::InvalidNonceLength {
            expected,
            actual: nonce.len(),
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn seal_with<T: Aead>(cipher: T, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    check_nonce::<T>(nonce)?;
    cipher
        .encrypt(Nonce::<T>::from_slice(nonce), Payload { msg: plaintext, aad })
        .map_err(Error::ErrEncryptFailed)
}

#[inline]
pub(crate) fn open_with<T: Aead>(cipher: T, nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    check_nonce::<T>(nonce)?;
    cipher
        .decrypt(Nonce::<T>::from_slice(nonce), Payload { msg: sealed, aad })
        .map_err(Error::ErrDecryptFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sealing_key_is_unique_per_iv() {
        let master = DerivedKey::from_bytes([7u8; DERIVED_KEY_LEN]);
        let a = sealing_key(&master, &[1u8; IV_LEN]).expect("hmac accepts any key length");
        let b = sealing_key(&master, &[2u8; IV_LEN]).expect("hmac accepts any key length");
        let again = sealing_key(&master, &[1u8; IV_LEN]).expect("hmac accepts any key length");

        assert_ne!(*a, *b);
        assert_eq!(*a, *again);
        assert_ne!(*a, *master.as_bytes());
    }

    #[test]
    fn test_sealing_key_depends_on_master() {
        let iv = [9u8; IV_LEN];
        let a = sealing_key(&DerivedKey::from_bytes([1u8; DERIVED_KEY_LEN]), &iv).expect("sealing key");
        let b = sealing_key(&DerivedKey::from_bytes([2u8; DERIVED_KEY_LEN]), &iv).expect("sealing key");
        assert_ne!(*a, *b);
    }

    #[test]
    fn test_native_aes_probe_is_stable() {
        assert_eq!(native_aes(), native_aes());
    }
}
