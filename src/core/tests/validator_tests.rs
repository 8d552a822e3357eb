// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

use crate::core::{types::Modifier, validator::{validate_key, validate_modifier, ValidationError}};

#[test]
fn test_valid_keys() {
    assert!(validate_key("K").is_ok());
    assert!(validate_key("k").is_ok());
    assert!(validate_key("Escape").is_ok());
    assert!(validate_key("F1").is_ok());
    assert!(validate_key("ArrowUp").is_ok());
    assert!(validate_key("?").is_ok());
}

#[test]
fn test_invalid_keys() {
    assert!(validate_key("K;L").is_err());
    assert!(validate_key("../etc/passwd").is_err());
    assert!(validate_key("KEY WITH SPACES").is_err());
    assert!(validate_key(" ").is_err());
    assert!(validate_key("1abc").is_err());
}

#[test]
fn test_modifier_names_are_not_keys() {
    assert_eq!(
        validate_key("shift"),
        Err(ValidationError::ModifierAsKey("shift".to_string()))
    );
    assert!(matches!(validate_key("Ctrl"), Err(ValidationError::ModifierAsKey(_))));
}

#[test]
fn test_valid_modifiers() {
    assert_eq!(validate_modifier("alt"), Ok(Modifier::Alt));
    assert_eq!(validate_modifier("SHIFT"), Ok(Modifier::Shift));
    assert_eq!(validate_modifier("ctrl"), Ok(Modifier::Control));
    assert_eq!(validate_modifier("meta"), Ok(Modifier::Command));
}

#[test]
fn test_unknown_modifier() {
    assert_eq!(
        validate_modifier("super"),
        Err(ValidationError::UnknownModifier("super".to_string()))
    );
}
