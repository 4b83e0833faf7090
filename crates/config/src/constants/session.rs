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

/// Passphrase used to derive the session token key
/// When unset, a random passphrase is generated at process start and issued
/// sessions do not survive a restart.
/// Environment variable: CONSOLE_PBKDF_PASSPHRASE
/// Example: CONSOLE_PBKDF_PASSPHRASE=SECRET
pub const ENV_CONSOLE_PBKDF_PASSPHRASE: &str = "CONSOLE_PBKDF_PASSPHRASE";

/// Salt used to derive the session token key
/// Environment variable: CONSOLE_PBKDF_SALT
/// Example: CONSOLE_PBKDF_SALT=SECRET
pub const ENV_CONSOLE_PBKDF_SALT: &str = "CONSOLE_PBKDF_SALT";

/// Passphrase used to derive the key that signs the OAuth2 `state` parameter
/// Defaults to the value of CONSOLE_PBKDF_PASSPHRASE
/// Environment variable: CONSOLE_IDP_HMAC_PASSPHRASE
pub const ENV_CONSOLE_IDP_HMAC_PASSPHRASE: &str = "CONSOLE_IDP_HMAC_PASSPHRASE";

/// Salt used to derive the key that signs the OAuth2 `state` parameter
/// Defaults to the value of CONSOLE_PBKDF_SALT
/// Environment variable: CONSOLE_IDP_HMAC_SALT
pub const ENV_CONSOLE_IDP_HMAC_SALT: &str = "CONSOLE_IDP_HMAC_SALT";

/// Length of the random passphrase generated when none is configured
/// Default value: 16
pub const DEFAULT_PBKDF_PASSPHRASE_LENGTH: usize = 16;

/// Length of the random salt generated when none is configured
/// Default value: 8
pub const DEFAULT_PBKDF_SALT_LENGTH: usize = 8;

/// Lifetime of a console session, in humantime notation
/// Controls the session cookie `Max-Age`/`Expires` attributes.
/// Environment variable: CONSOLE_STS_DURATION
/// Example: CONSOLE_STS_DURATION=12h
pub const ENV_CONSOLE_STS_DURATION: &str = "CONSOLE_STS_DURATION";

/// Default console session lifetime
/// Default value: 1h
/// Environment variable: CONSOLE_STS_DURATION
pub const DEFAULT_CONSOLE_STS_DURATION: &str = "1h";

/// Mark session cookies as `Secure`
/// Should be enabled whenever the console is served over TLS.
/// Environment variable: CONSOLE_SECURE_COOKIES
/// Example: CONSOLE_SECURE_COOKIES=true
pub const ENV_CONSOLE_SECURE_COOKIES: &str = "CONSOLE_SECURE_COOKIES";

/// Default value for the `Secure` cookie attribute
/// Default value: false
pub const DEFAULT_CONSOLE_SECURE_COOKIES: bool = false;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "token";

/// Alphabet used for generated passphrases, salts and OAuth2 state values
/// 32 symbols, so a random byte maps onto it without bias.
pub const RANDOM_CHAR_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";
