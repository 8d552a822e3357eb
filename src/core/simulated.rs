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

//! Sequences the application may synthesize itself
//!
//! Some handlers dispatch key events to trigger native behaviour, e.g.
//! sending `Escape` to dismiss a popup. Handlers bound to those same
//! sequences must not run while another handler is in flight, or the
//! synthetic key would re-enter our own hotkey.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::parser::{parse_sequence, ParseError};
use crate::core::types::KeySequence;

/// Sequences simulated when no configuration says otherwise
pub const DEFAULT_SIMULATED_KEYS: &[&str] = &["Escape"];

/// Read-only set of canonical sequence strings
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SimulatedKeySet {
    sequences: BTreeSet<String>,
}

impl SimulatedKeySet {
    /// Builds the set from configuration strings
    ///
    /// Every entry is parsed and stored in canonical form, so `shift+Alt+x`
    /// and `alt+shift+x` name the same member.
    pub fn new<I, S>(sequences: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sequences = sequences
            .into_iter()
            .map(|s| parse_sequence(s.as_ref()).map(|seq| seq.to_string()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self { sequences })
    }

    /// A set nothing is a member of
    pub fn empty() -> Self {
        Self {
            sequences: BTreeSet::new(),
        }
    }

    pub fn contains(&self, sequence: &KeySequence) -> bool {
        self.sequences.contains(&sequence.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl Default for SimulatedKeySet {
    fn default() -> Self {
        Self {
            sequences: DEFAULT_SIMULATED_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for SimulatedKeySet {
    type Error = ParseError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SimulatedKeySet> for Vec<String> {
    fn from(set: SimulatedKeySet) -> Self {
        set.sequences.into_iter().collect()
    }
}
