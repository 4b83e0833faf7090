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

use crate::error::Result;
use console_config::SESSION_COOKIE_NAME;
use std::time::Duration;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const HTTP_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT");

const EPOCH_HTTP_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn new_session_cookie(token: &str, lifetime: Duration, secure: bool) -> Result<String> {
    new_session_cookie_at(token, lifetime, secure, OffsetDateTime::now_utc())
}

pub fn new_session_cookie_at(token: &str, lifetime: Duration, secure: bool, now: OffsetDateTime) -> Result<String> {
    let lifetime_td = time::Duration::try_from(lifetime).unwrap_or(time::Duration::MAX);
    let expires = now.saturating_add(lifetime_td).format(HTTP_DATE)?;
    Ok(cookie(token, &lifetime.as_secs().to_string(), &expires, secure))
}

/// `Set-Cookie` value that clears the session cookie on logout.
pub fn expire_session_cookie(secure: bool) -> String {
    cookie("", "-1", EPOCH_HTTP_DATE, secure)
}

fn cookie(value: &str, max_age: &str, expires: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE_NAME}={value}; Path=/; Max-Age={max_age}; Expires={expires}; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_session_cookie_attributes() {
        let now = datetime!(2024-03-05 10:00:00 UTC);
        let cookie = new_session_cookie_at("abc+/=", Duration::from_secs(3600), false, now).expect("cookie");
        assert_eq!(
            cookie,
            "token=abc+/=; Path=/; Max-Age=3600; Expires=Tue, 05 Mar 2024 11:00:00 GMT; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_secure_flag() {
        let cookie = new_session_cookie("abc", Duration::from_secs(60), true).expect("cookie");
        assert!(cookie.starts_with("token=abc; Path=/; Max-Age=60; Expires="));
        assert!(cookie.ends_with("; HttpOnly; SameSite=Lax; Secure"));
    }

    #[test]
    fn test_expire_cookie() {
        assert_eq!(
            expire_session_cookie(false),
            "token=; Path=/; Max-Age=-1; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax"
        );
        assert!(expire_session_cookie(true).ends_with("; Secure"));
    }

    #[test]
    fn test_cookie_is_a_valid_header() {
        let cookie = new_session_cookie("abc", Duration::from_secs(60), false).expect("cookie");
        assert!(http::HeaderValue::from_str(&cookie).is_ok());
    }
}
