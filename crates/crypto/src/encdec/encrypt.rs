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

use crate::cipher::{AeadCipher, IV_LEN, sealing_key};
use crate::error::Result;
use crate::kdf::DerivedKey;

/// Seals `plaintext` into `[id][iv][nonce][sealed]` with a fresh IV and nonce.
pub(crate) fn seal_envelope(master: &DerivedKey, cipher: &dyn AeadCipher, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let iv: [u8; IV_LEN] = rand::random();
    let nonce = cipher.generate_nonce();

    let key = sealing_key(master, &iv)?;
    let sealed = cipher.seal(&key, &nonce, plaintext, aad)?;

    let mut ciphertext = Vec::with_capacity(1 + iv.len() + nonce.len() + sealed.len());
    ciphertext.push(cipher.algorithm() as u8);
    ciphertext.extend_from_slice(&iv);
    ciphertext.extend_from_slice(&nonce);
    ciphertext.extend_from_slice(&sealed);

    Ok(ciphertext)
}
