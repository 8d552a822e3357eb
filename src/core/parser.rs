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

//! src/core/parser.rs
//!
//! Chord and sequence string parser
//!
//! Binding strings use Mousetrap style syntax:
//! - A chord is modifiers and a key joined by `+` (`alt+shift+g`, `Escape`)
//! - A sequence is chords separated by a single space (`g g`, `control+x s`)
//!
//! # Architecture
//! The parser uses nom combinators to split the input into raw tokens,
//! then hands each token to the validator. Splitting and validating are
//! kept apart so error messages can name the offending token.
//!
//! Parsing never lowercases the key: `D` and `d` are distinct until the
//! chord is capital-normalized.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    IResult, Parser,
};
use thiserror::Error;

use crate::core::types::{KeyChord, KeySequence};
use crate::core::validator::{validate_key, validate_modifier, ValidationError};

/// Parse errors with the offending input
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Empty key sequence")]
    EmptySequence,

    #[error("Missing key in chord '{0}'")]
    EmptyKey(String),

    #[error("Empty chord in sequence '{0}' (chords are separated by a single space)")]
    EmptyChord(String),

    #[error("Parse error in '{input}': {message}")]
    InvalidSyntax { input: String, message: String },

    #[error("Invalid chord '{chord}': {source}")]
    Invalid {
        chord: String,
        #[source]
        source: ValidationError,
    },
}

/// Split a chord into its `+` separated tokens
///
/// Tokens may be empty; `alt+` yields `["alt", ""]`.
pub fn chord_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char('+'), take_till(|c: char| c == '+'))).parse(input)
}

/// Split a sequence into its single-space separated chord tokens
pub fn sequence_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char(' '), take_till(|c: char| c == ' '))).parse(input)
}

/// Parse a chord string such as `alt+G`
///
/// The last token is the key; preceding tokens are modifiers.
///
/// # Example
/// ```
/// use hotkey_dispatch::core::parser::parse_chord;
///
/// let chord = parse_chord("control+s").unwrap();
/// assert_eq!(chord.key(), "s");
/// ```
pub fn parse_chord(input: &str) -> Result<KeyChord, ParseError> {
    let (_, tokens) = chord_tokens(input).map_err(|e| ParseError::InvalidSyntax {
        input: input.to_string(),
        message: e.to_string(),
    })?;

    let invalid = |source: ValidationError| ParseError::Invalid {
        chord: input.to_string(),
        source,
    };

    let (key, modifier_tokens) = match tokens.split_last() {
        Some((key, rest)) if !key.is_empty() => (*key, rest),
        _ => return Err(ParseError::EmptyKey(input.to_string())),
    };

    let modifiers = modifier_tokens
        .iter()
        .map(|token| validate_modifier(token))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    validate_key(key).map_err(invalid)?;

    Ok(KeyChord::new(key, modifiers))
}

/// Parse a sequence string such as `g g`
pub fn parse_sequence(input: &str) -> Result<KeySequence, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptySequence);
    }

    let (_, tokens) = sequence_tokens(input).map_err(|e| ParseError::InvalidSyntax {
        input: input.to_string(),
        message: e.to_string(),
    })?;

    let mut chords = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.is_empty() {
            return Err(ParseError::EmptyChord(input.to_string()));
        }
        chords.push(parse_chord(token)?);
    }

    KeySequence::new(chords).ok_or(ParseError::EmptySequence)
}
