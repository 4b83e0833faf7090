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

//! ChaCha20-Poly1305 envelope cipher, the software fallback.

use crate::cipher::{AeadCipher, open_with, seal_with};
use crate::encdec::id::AlgorithmId;
use crate::error::Result;
use crate::kdf::DERIVED_KEY_LEN;
use chacha20poly1305::{
    ChaCha20Poly1305, KeyInit,
    aead::{AeadCore, OsRng},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChaCha20Poly1305Cipher;

impl AeadCipher for ChaCha20Poly1305Cipher {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::ChaCha20Poly1305
    }

    fn generate_nonce(&self) -> Vec<u8> {
        ChaCha20Poly1305::generate_nonce(&mut OsRng).to_vec()
    }

    fn seal(&self, key: &[u8; DERIVED_KEY_LEN], nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        seal_with(ChaCha20Poly1305::new_from_slice(key)?, nonce, plaintext, aad)
    }

    fn open(&self, key: &[u8; DERIVED_KEY_LEN], nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        open_with(ChaCha20Poly1305::new_from_slice(key)?, nonce, sealed, aad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cipher::NONCE_LEN;

    const KEY: [u8; DERIVED_KEY_LEN] = [0x24; DERIVED_KEY_LEN];

    #[test]
    fn test_chacha20_poly1305_seal_open() {
        let cipher = ChaCha20Poly1305Cipher;
        let nonce = cipher.generate_nonce();
        assert_eq!(nonce.len(), NONCE_LEN);

        let sealed = cipher.seal(&KEY, &nonce, b"Hello, World!", &[]).expect("Encryption failed");
        assert_ne!(&sealed[..13], b"Hello, World!");

        let opened = cipher.open(&KEY, &nonce, &sealed, &[]).expect("Decryption failed");
        assert_eq!(opened, b"Hello, World!");
    }

    #[test]
    fn test_chacha20_poly1305_rejects_other_key() {
        let cipher = ChaCha20Poly1305Cipher;
        let nonce = cipher.generate_nonce();
        let sealed = cipher.seal(&KEY, &nonce, b"payload", &[]).expect("Encryption failed");
        let other = [0x25; DERIVED_KEY_LEN];
        assert!(matches!(cipher.open(&other, &nonce, &sealed, &[]), Err(Error::ErrDecryptFailed(_))));
    }

    #[test]
    fn test_chacha20_poly1305_invalid_nonce_length() {
        let cipher = ChaCha20Poly1305Cipher;
        let result = cipher.open(&KEY, &[0u8; 24], &[0u8; 32], &[]);
        assert!(matches!(result, Err(Error::InvalidNonceLength { expected: 12, actual: 24 })));
    }
}
