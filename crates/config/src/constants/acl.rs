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

/// Run the console in operator-only mode
/// Selects the operator endpoint table instead of the standard one.
/// Default value: false
/// Environment variable: CONSOLE_OPERATOR_MODE
/// Example: CONSOLE_OPERATOR_MODE=on
pub const ENV_CONSOLE_OPERATOR_MODE: &str = "CONSOLE_OPERATOR_MODE";

/// Default operator mode
pub const DEFAULT_CONSOLE_OPERATOR_MODE: bool = false;

/// An external directory service (LDAP) manages users and groups
/// When enabled the users and groups sections are not displayed.
/// Default value: false
/// Environment variable: CONSOLE_LDAP_ENABLED
/// Example: CONSOLE_LDAP_ENABLED=on
pub const ENV_CONSOLE_LDAP_ENABLED: &str = "CONSOLE_LDAP_ENABLED";

/// Default LDAP toggle
pub const DEFAULT_CONSOLE_LDAP_ENABLED: bool = false;
