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

use std::path::PathBuf;
use thiserror::Error;

use crate::core::ParseError;

/// Errors that can occur while loading a keymap.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Keymap file does not exist.
    #[error("Keymap file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Keymap is not valid JSON or has the wrong shape.
    #[error("Invalid keymap JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A binding's sequence failed to parse.
    #[error("Invalid sequence for action '{action}': {source}")]
    InvalidSequence {
        action: String,
        #[source]
        source: ParseError,
    },
    /// Two bindings share the same action name.
    #[error("Duplicate action: {0}")]
    DuplicateAction(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
