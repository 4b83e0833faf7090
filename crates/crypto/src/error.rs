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

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unexpected header")]
    ErrUnexpectedHeader,

    #[error("invalid encryption algorithm ID: {0}")]
    ErrInvalidAlgID(u8),

    #[error("{0}")]
    ErrInvalidLength(#[from] sha2::digest::InvalidLength),

    #[error("encrypt failed")]
    ErrEncryptFailed(aes_gcm::aead::Error),

    #[error("decrypt failed")]
    ErrDecryptFailed(aes_gcm::aead::Error),

    #[error("Invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// Returned by [`crate::AeadCodec::decrypt`] for every failure, whatever the cause.
    #[error("malformed ciphertext")]
    ErrMalformedCiphertext,
}
