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

use crate::aes::AesGcmCipher;
use crate::chacha20::ChaCha20Poly1305Cipher;
use crate::cipher::AeadCipher;

/// Algorithm identifier stored in the first byte of an envelope.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    AesGcm = 0x00,
    ChaCha20Poly1305 = 0x01,
}

impl TryFrom<u8> for AlgorithmId {
    type Error = crate::Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::AesGcm),
            0x01 => Ok(Self::ChaCha20Poly1305),
            _ => Err(crate::Error::ErrInvalidAlgID(value)),
        }
    }
}

impl AlgorithmId {
    /// The cipher implementing this algorithm.
    pub fn cipher(self) -> &'static dyn AeadCipher {
        match self {
            AlgorithmId::AesGcm => &AesGcmCipher,
            AlgorithmId::ChaCha20Poly1305 => &ChaCha20Poly1305Cipher,
        }
    }
}
