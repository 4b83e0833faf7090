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

//! AES-256-GCM envelope cipher, preferred where the CPU accelerates AES.

use crate::cipher::{AeadCipher, open_with, seal_with};
use crate::encdec::id::AlgorithmId;
use crate::error::Result;
use crate::kdf::DERIVED_KEY_LEN;
use aes_gcm::{
    Aes256Gcm, KeyInit,
    aead::{AeadCore, OsRng},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmCipher;

impl AeadCipher for AesGcmCipher {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::AesGcm
    }

    fn generate_nonce(&self) -> Vec<u8> {
        Aes256Gcm::generate_nonce(&mut OsRng).to_vec()
    }

    fn seal(&self, key: &[u8; DERIVED_KEY_LEN], nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        seal_with(Aes256Gcm::new_from_slice(key)?, nonce, plaintext, aad)
    }

    fn open(&self, key: &[u8; DERIVED_KEY_LEN], nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        open_with(Aes256Gcm::new_from_slice(key)?, nonce, sealed, aad)
    }
}
