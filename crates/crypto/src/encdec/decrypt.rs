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

use crate::cipher::{IV_LEN, TAG_LEN, sealing_key};
use crate::encdec::id::AlgorithmId;
use crate::error::{Error, Result};
use crate::kdf::DerivedKey;

/// Opens an envelope produced by `seal_envelope`.
///
/// The error says why the envelope was rejected; callers outside this crate
/// only ever see [`Error::ErrMalformedCiphertext`].
pub(crate) fn open_envelope(master: &DerivedKey, data: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let (&id, rest) = data.split_first().ok_or(Error::ErrUnexpectedHeader)?;
    let cipher = AlgorithmId::try_from(id)?.cipher();

    let nonce_size = cipher.nonce_size();
    if rest.len() < IV_LEN + nonce_size + TAG_LEN {
        return Err(Error::ErrUnexpectedHeader);
    }

    let (iv, rest) = rest.split_at(IV_LEN);
    let (nonce, sealed) = rest.split_at(nonce_size);
    let iv: &[u8; IV_LEN] = iv.try_into().map_err(|_| Error::ErrUnexpectedHeader)?;

    let key = sealing_key(master, iv)?;
    cipher.open(&key, nonce, sealed, aad)
}
