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

use crate::error::{Error, Result};
use console_config::SESSION_COOKIE_NAME;
use http::{HeaderMap, Request, header};
use time::OffsetDateTime;
use tracing::debug;

/// A cookie as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCookie<'a> {
    pub value: &'a str,
    /// Known expiry, for carriers that track it. Plain request headers never do.
    pub expires: Option<OffsetDateTime>,
}

/// Anything a session token can arrive on.
pub trait TokenCarrier {
    fn cookie(&self, name: &str) -> Option<RequestCookie<'_>>;

    /// Raw `Authorization` header value.
    fn authorization(&self) -> Option<&str>;
}

impl TokenCarrier for HeaderMap {
    fn cookie(&self, name: &str) -> Option<RequestCookie<'_>> {
        self.get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| RequestCookie {
                value: value.trim().trim_matches('"'),
                expires: None,
            })
    }

    fn authorization(&self) -> Option<&str> {
        self.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok())
    }
}

impl<B> TokenCarrier for Request<B> {
    fn cookie(&self, name: &str) -> Option<RequestCookie<'_>> {
        self.headers().cookie(name)
    }

    fn authorization(&self) -> Option<&str> {
        self.headers().authorization()
    }
}

/// Pulls the session token off a request.
///
/// The `token` cookie wins over an `Authorization: Bearer` header. A cookie
/// already past its known expiry fails with [`Error::ExpiredToken`] without
/// looking any further.
pub fn extract_token<C: TokenCarrier + ?Sized>(carrier: &C) -> Result<&str> {
    extract_token_at(carrier, OffsetDateTime::now_utc())
}

pub fn extract_token_at<C: TokenCarrier + ?Sized>(carrier: &C, now: OffsetDateTime) -> Result<&str> {
    if let Some(cookie) = carrier.cookie(SESSION_COOKIE_NAME) {
        if cookie.expires.is_some_and(|expires| expires <= now) {
            debug!("session cookie already expired");
            return Err(Error::ExpiredToken);
        }
        if !cookie.value.is_empty() {
            return Ok(cookie.value);
        }
    }

    if let Some(token) = carrier
        .authorization()
        .and_then(|value| value.strip_prefix("Bearer"))
        .map(str::trim)
        && !token.is_empty()
    {
        return Ok(token);
    }

    Err(Error::MissingToken)
}
