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

pub(crate) mod decrypt;
pub(crate) mod encrypt;
pub mod id;

use crate::cipher::native_aes;
use crate::error::{Error, Result};
use crate::kdf::DerivedKey;
use id::AlgorithmId;
use tracing::debug;

/// Seals and opens envelopes under one master key.
///
/// The sealing algorithm is fixed at construction; decryption accepts either
/// algorithm, as named by the envelope's first byte.
#[derive(Debug, Clone)]
pub struct AeadCodec {
    key: DerivedKey,
    preferred: AlgorithmId,
}

impl AeadCodec {
    /// Picks AES-256-GCM when the CPU accelerates it, ChaCha20-Poly1305 otherwise.
    pub fn new(key: DerivedKey) -> Self {
        Self::with_probe(key, native_aes)
    }

    /// Picks AES-256-GCM when `probe` reports hardware AES support.
    pub fn with_probe(key: DerivedKey, probe: impl FnOnce() -> bool) -> Self {
        let preferred = if probe() {
            AlgorithmId::AesGcm
        } else {
            AlgorithmId::ChaCha20Poly1305
        };
        debug!(algorithm = ?preferred, "selected session cipher");
        Self { key, preferred }
    }

    pub fn with_algorithm(key: DerivedKey, algorithm: AlgorithmId) -> Self {
        Self { key, preferred: algorithm }
    }

    /// Algorithm new envelopes are sealed with.
    pub fn algorithm(&self) -> AlgorithmId {
        self.preferred
    }

    pub fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        encrypt::seal_envelope(&self.key, self.preferred.cipher(), plaintext, aad)
    }

    /// Opens an envelope sealed by any codec holding the same key.
    ///
    /// Fails closed with [`Error::ErrMalformedCiphertext`] on a truncated
    /// envelope, an unknown algorithm, a bad nonce or a failed tag check.
    pub fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        decrypt::open_envelope(&self.key, ciphertext, aad).map_err(|err| {
            debug!(error = %err, "rejected ciphertext");
            Error::ErrMalformedCiphertext
        })
    }
}
