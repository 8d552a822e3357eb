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

//! Keymap files
//!
//! A keymap is a JSON document listing the simulatable sequences and the
//! bindings to register:
//!
//! ```json
//! {
//!   "simulated_keys": ["Escape"],
//!   "bindings": [
//!     { "sequence": "g g", "action": "go-top", "description": "Jump to top" }
//!   ]
//! }
//! ```
//!
//! Both fields are optional. `simulated_keys` falls back to `["Escape"]`.
//!
//! # Example
//!
//! ```no_run
//! use hotkey_dispatch::config::load_keymap;
//! use std::path::Path;
//!
//! let keymap = load_keymap(Path::new("~/.config/hotkeys.json"))?;
//! for binding in keymap.parse_bindings()? {
//!     println!("{} → {}", binding.sequence, binding.action);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Conflict, ConflictDetector, KeySequence, SimulatedKeySet};

/// One entry of the `bindings` array, as written in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    pub sequence: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A binding whose sequence has been parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBinding {
    pub sequence: KeySequence,
    pub action: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub simulated_keys: SimulatedKeySet,
    #[serde(default)]
    pub bindings: Vec<BindingEntry>,
}

impl KeymapConfig {
    /// Parses a keymap document and rejects duplicate action names
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let keymap: Self = serde_json::from_str(content)?;
        keymap.check_duplicate_actions()?;
        Ok(keymap)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn simulated_key_set(&self) -> &SimulatedKeySet {
        &self.simulated_keys
    }

    /// Parses every binding's sequence, in file order
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSequence` naming the action of the first
    /// binding that fails to parse.
    pub fn parse_bindings(&self) -> Result<Vec<ParsedBinding>, ConfigError> {
        self.bindings
            .iter()
            .map(|entry| {
                let sequence = entry.sequence.parse::<KeySequence>().map_err(|source| {
                    ConfigError::InvalidSequence {
                        action: entry.action.clone(),
                        source,
                    }
                })?;

                Ok(ParsedBinding {
                    sequence,
                    action: entry.action.clone(),
                    description: entry.description.clone(),
                })
            })
            .collect()
    }

    /// Binding forms claimed by more than one sequence
    pub fn conflicts(&self) -> Result<Vec<Conflict>, ConfigError> {
        let mut detector = ConflictDetector::new();
        for binding in self.parse_bindings()? {
            detector.add_sequence(binding.sequence);
        }
        Ok(detector.find_conflicts())
    }

    fn check_duplicate_actions(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.bindings {
            if !seen.insert(entry.action.as_str()) {
                return Err(ConfigError::DuplicateAction(entry.action.clone()));
            }
        }
        Ok(())
    }
}

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Reads and parses a keymap file
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the (expanded) path does not exist,
/// and `Json` or `DuplicateAction` for bad contents. Sequences are only
/// parsed by [`KeymapConfig::parse_bindings`].
pub fn load_keymap(path: &Path) -> Result<KeymapConfig, ConfigError> {
    let path = expand_path(path)?;
    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let keymap = KeymapConfig::from_json(&content)?;

    tracing::debug!(
        path = %path.display(),
        bindings = keymap.bindings.len(),
        "Loaded keymap"
    );

    Ok(keymap)
}

#[cfg(test)]
mod tests;
