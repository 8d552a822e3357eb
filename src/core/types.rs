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

//! src/core/types.rs
//!
//! Core type definitions for hotkey dispatch
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifier`: Keyboard modifier keys (alt, shift, control, command)
//! - `KeyChord`: One key pressed together with zero or more modifiers
//! - `KeySequence`: One or more chords pressed in succession
//! - `KeyEvent`: What a handler receives when its sequence matches
//!
//! Chords and sequences are immutable. Their `Display` output is the
//! canonical string form, which is also what they serialise to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::core::parser::{parse_chord, parse_sequence, ParseError};
use crate::core::simulated::SimulatedKeySet;

/// Keyboard modifier keys
///
/// Variant order is the canonical order used when printing a chord,
/// so `shift+alt+x` always prints as `alt+shift+x`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Alt/Option key
    Alt,
    /// Shift key
    Shift,
    /// Control key
    Control,
    /// Command/Meta key
    Command,
}

impl Modifier {
    /// All modifiers in canonical order
    pub const ALL: [Modifier; 4] = [
        Modifier::Alt,
        Modifier::Shift,
        Modifier::Control,
        Modifier::Command,
    ];

    /// Maps a modifier token (case insensitive) to a `Modifier`
    ///
    /// Accepts the canonical names plus the common aliases
    /// `option`, `ctrl`, `cmd` and `meta`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            "control" | "ctrl" => Some(Modifier::Control),
            "command" | "cmd" | "meta" => Some(Modifier::Command),
            _ => None,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
            Modifier::Control => "control",
            Modifier::Command => "command",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single key plus the modifiers held with it
///
/// The key is case sensitive: `D` and `d` are different chords until
/// [`KeyChord::normalize_capital`] is applied.
///
/// # Example
/// ```
/// use hotkey_dispatch::core::KeyChord;
///
/// let chord: KeyChord = "alt+G".parse().unwrap();
/// assert_eq!(chord.normalize_capital().to_string(), "alt+shift+g");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyChord {
    key: String,
    modifiers: BTreeSet<Modifier>,
}

impl KeyChord {
    /// Builds a chord from an already validated key and a set of modifiers
    ///
    /// Duplicate modifiers collapse. No validation is performed here;
    /// configuration strings should go through [`KeyChord::from_str`].
    pub fn new(key: impl Into<String>, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            key: key.into(),
            modifiers: modifiers.into_iter().collect(),
        }
    }

    /// The key token, e.g. `"g"`, `"D"`, `"Escape"`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Modifiers in canonical order
    pub fn modifiers(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.modifiers.iter().copied()
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// True when the key is a single uppercase ASCII letter
    pub fn is_capital_letter(&self) -> bool {
        unshifted_letter(&self.key).is_some()
    }

    /// Converts a capital letter into shift plus the lowercase letter
    ///
    /// Holding shift+j repeats as a plain `J` in the keyboard layer, while
    /// the initial press arrives as `shift+j`. Normalising lets both be
    /// derived from one configured chord.
    ///
    /// - `D` → `shift+d`
    /// - `alt+D` → `alt+shift+d`
    /// - `d` → `d`
    pub fn normalize_capital(&self) -> KeyChord {
        match unshifted_letter(&self.key) {
            Some(lower) => {
                let mut modifiers = self.modifiers.clone();
                modifiers.insert(Modifier::Shift);
                KeyChord {
                    key: lower.to_string(),
                    modifiers,
                }
            }
            None => self.clone(),
        }
    }
}

/// Lowercase counterpart of a single uppercase ASCII letter
fn unshifted_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        f.write_str(&self.key)
    }
}

impl FromStr for KeyChord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s)
    }
}

impl TryFrom<String> for KeyChord {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_chord(&value)
    }
}

impl From<KeyChord> for String {
    fn from(chord: KeyChord) -> Self {
        chord.to_string()
    }
}

/// An ordered chain of chords, e.g. `g g` or `alt+D`
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeySequence {
    chords: Vec<KeyChord>,
}

impl KeySequence {
    /// Builds a sequence from chords in press order
    ///
    /// Returns `None` for an empty chord list.
    pub fn new(chords: Vec<KeyChord>) -> Option<Self> {
        if chords.is_empty() {
            None
        } else {
            Some(Self { chords })
        }
    }

    pub fn chords(&self) -> &[KeyChord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// True only for an empty chord list, which `new` never builds
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn uses_multiple_chords(&self) -> bool {
        self.chords.len() > 1
    }

    /// Whether the system itself may synthesize this exact sequence
    pub fn might_be_simulated(&self, simulated: &SimulatedKeySet) -> bool {
        simulated.contains(self)
    }

    /// Applies `f` to every chord
    pub fn map(&self, f: impl FnMut(&KeyChord) -> KeyChord) -> KeySequence {
        KeySequence {
            chords: self.chords.iter().map(f).collect(),
        }
    }

    /// Every chord capital-normalized
    pub fn normalize_capitals(&self) -> KeySequence {
        self.map(KeyChord::normalize_capital)
    }

    /// Alternative sequences that must all trigger the same handler
    ///
    /// Pressing shift+j fires `shift+j`, but holding it fires just `J`.
    /// Only a lone capital-letter chord is ambiguous this way; everything
    /// else needs a single normalised form.
    pub fn binding_sequences(&self) -> Vec<KeySequence> {
        match self.chords.as_slice() {
            [chord] if chord.is_capital_letter() => {
                vec![self.clone(), self.normalize_capitals()]
            }
            _ => vec![self.normalize_capitals()],
        }
    }

    /// Literal strings a listener must register for this sequence
    ///
    /// # Example
    /// ```
    /// use hotkey_dispatch::core::KeySequence;
    ///
    /// let sequence: KeySequence = "G".parse().unwrap();
    /// assert_eq!(sequence.to_binding_forms(), vec!["G", "shift+g"]);
    /// ```
    pub fn to_binding_forms(&self) -> Vec<String> {
        self.binding_sequences()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chords = self.chords.iter();
        if let Some(first) = chords.next() {
            write!(f, "{}", first)?;
        }
        for chord in chords {
            write!(f, " {}", chord)?;
        }
        Ok(())
    }
}

impl FromStr for KeySequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequence(s)
    }
}

impl TryFrom<String> for KeySequence {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_sequence(&value)
    }
}

impl From<KeySequence> for String {
    fn from(sequence: KeySequence) -> Self {
        sequence.to_string()
    }
}

/// Event delivered to a handler
///
/// `chord` is the chord as the listener received it. `binding` is the
/// registered form that matched, when the event came through a listener.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    pub chord: KeyChord,
    pub binding: Option<String>,
}

impl KeyEvent {
    pub fn new(chord: KeyChord) -> Self {
        Self {
            chord,
            binding: None,
        }
    }

    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }
}
