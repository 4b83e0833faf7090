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

/// Errors surfaced to the HTTP layer.
///
/// Decode and validation failures carry no detail about what went wrong.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no auth token provided")]
    MissingToken,

    #[error("invalid session token")]
    MalformedToken,

    #[error("session expired")]
    ExpiredToken,

    #[error("invalid state")]
    InvalidState,

    #[error("provided credentials are empty")]
    EmptyCredentials,

    #[error("crypto: {0}")]
    Crypto(#[from] console_crypto::Error),

    #[error("serialize claims: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid identity provider URL: {0}")]
    InvalidLoginUrl(#[from] url::ParseError),

    #[error("format cookie expiry: {0}")]
    CookieDate(#[from] time::error::Format),
}
