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

//! Key derivation and authenticated encryption for console session tokens.
//!
//! A single [`DerivedKey`] is computed from an operator passphrase and salt,
//! and [`AeadCodec`] seals payloads into self-describing envelopes:
//!
//! ```text
//! [1-byte algorithm id][16-byte IV][nonce][sealed bytes + tag]
//! ```
//!
//! Every envelope is sealed under its own key, HMAC-SHA256(master key, IV).

mod aes;
mod chacha20;
mod cipher;
mod encdec;
mod error;
mod kdf;

pub use aes::AesGcmCipher;
pub use chacha20::ChaCha20Poly1305Cipher;
pub use cipher::{AeadCipher, IV_LEN, NONCE_LEN, TAG_LEN, native_aes, sealing_key};
pub use encdec::AeadCodec;
pub use encdec::id::AlgorithmId;
pub use error::{Error, Result};
pub use kdf::{DERIVED_KEY_LEN, DerivedKey, PBKDF2_ITERATIONS, derive_key};
