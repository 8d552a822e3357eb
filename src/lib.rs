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

//! Hotkey Dispatch
//!
//! Keyboard shortcut dispatch for interactive applications: parsing and
//! normalizing key chords, expanding them into the binding forms a key
//! listener matches, and running handlers under an execution guard.
//!
//! # Features
//!
//! - **Chord normalization:** `G` and `shift+g` are recognized as the same key
//! - **Execution guard:** Key events simulated by a running handler are dropped
//! - **Sequence reset:** Multi-chord sequences fire once per completed press
//! - **Keymap files:** JSON keymaps with conflict detection
//!
//! # Architecture
//!
//! - **`core`:** Chord and sequence types, parsing, validation, conflicts
//! - **`dispatch`:** Handler guard, history reset, pipeline, listener
//! - **`config`:** Keymap loading
//! - **`logging`:** Tracing subscriber setup
//!
//! # Examples
//!
//! ## Binding forms
//!
//! ```
//! use hotkey_dispatch::core::KeySequence;
//!
//! let sequence: KeySequence = "G".parse()?;
//! assert_eq!(sequence.to_binding_forms(), vec!["G", "shift+g"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Guarding handlers
//!
//! ```
//! use hotkey_dispatch::core::{KeyChord, KeyEvent, KeySequence, SimulatedKeySet};
//! use hotkey_dispatch::dispatch::{sync_handler, ExecutionGuard};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let guard = ExecutionGuard::new(SimulatedKeySet::default());
//! let sequence: KeySequence = "Escape".parse()?;
//! let escape = guard.wrap(&sequence, sync_handler(|_| Ok(())));
//!
//! let chord: KeyChord = "Escape".parse()?;
//! escape(KeyEvent::new(chord)).await?;
//! assert_eq!(guard.active_count(), 0);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod dispatch;
pub mod logging;

// Re-export commonly used types for convenience
pub use core::{KeyChord, KeyEvent, KeySequence, Modifier, SimulatedKeySet};
pub use dispatch::{ExecutionGuard, HotkeyListener};
