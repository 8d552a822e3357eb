// Copyright 2025 bakri (tidynest@proton.me)
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

//! Whitelist validation for chord tokens
//!
//! Configuration strings are validated token by token before any chord is
//! built, so a malformed keymap fails at registration rather than at the
//! first keypress.
//!
//! A key token is accepted when it is either a single visible character
//! (`g`, `D`, `/`, `?`) or a named key made of ASCII letters and digits
//! (`Escape`, `F1`, `ArrowUp`). Modifier names are never valid keys.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::types::Modifier;

/// Validation errors
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Key name contains invalid characters
    #[error("Invalid key name '{0}'")]
    InvalidKey(String),

    /// Modifier token is not alt, shift, control or command (or an alias)
    #[error("Unknown modifier '{0}'")]
    UnknownModifier(String),

    /// A modifier name was used in the key position
    #[error("'{0}' is a modifier and cannot be used as the key")]
    ModifierAsKey(String),
}

static NAMED_KEY: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$"));

fn is_named_key(key: &str) -> bool {
    match NAMED_KEY.as_ref() {
        Ok(re) => re.is_match(key),
        Err(_) => key.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}

/// Validates key name format
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    if Modifier::from_token(key).is_some() {
        return Err(ValidationError::ModifierAsKey(key.to_string()));
    }

    let mut chars = key.chars();
    let single_visible = matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if !c.is_whitespace() && !c.is_control()
    );

    if single_visible || is_named_key(key) {
        Ok(())
    } else {
        Err(ValidationError::InvalidKey(key.to_string()))
    }
}

/// Validates a modifier token and maps it to a `Modifier`
pub fn validate_modifier(token: &str) -> Result<Modifier, ValidationError> {
    Modifier::from_token(token).ok_or_else(|| ValidationError::UnknownModifier(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters() {
        assert!(validate_key("g").is_ok());
        assert!(validate_key("G").is_ok());
        assert!(validate_key("/").is_ok());
    }

    #[test]
    fn test_control_character_rejected() {
        assert!(validate_key("\t").is_err());
    }
}
