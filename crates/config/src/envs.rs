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

use std::env;

pub fn get_env_str(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Returns the trimmed value of `key`, treating an empty value as unset.
pub fn get_env_opt_str(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn get_env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| match v.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_env_bool_accepts_on_off() {
        temp_env::with_var("CONSOLE_TEST_BOOL", Some("on"), || {
            assert!(get_env_bool("CONSOLE_TEST_BOOL", false));
        });
        temp_env::with_var("CONSOLE_TEST_BOOL", Some("OFF"), || {
            assert!(!get_env_bool("CONSOLE_TEST_BOOL", true));
        });
        temp_env::with_var("CONSOLE_TEST_BOOL", Some("maybe"), || {
            assert!(get_env_bool("CONSOLE_TEST_BOOL", true));
        });
        temp_env::with_var_unset("CONSOLE_TEST_BOOL", || {
            assert!(!get_env_bool("CONSOLE_TEST_BOOL", false));
        });
    }

    #[test]
    #[serial]
    fn test_get_env_opt_str_ignores_blank() {
        temp_env::with_var("CONSOLE_TEST_STR", Some("   "), || {
            assert_eq!(get_env_opt_str("CONSOLE_TEST_STR"), None);
        });
        temp_env::with_var("CONSOLE_TEST_STR", Some(" value "), || {
            assert_eq!(get_env_opt_str("CONSOLE_TEST_STR").as_deref(), Some("value"));
        });
    }
}
