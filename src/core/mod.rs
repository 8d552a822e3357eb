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

//! src/core/mod.rs
//!
//! Key normalisation
//!
//! This module contains the data structures and algorithms that turn
//! configuration strings into canonical, comparable key sequences:
//! - Type definitions for chords, sequences and key events
//! - nom based parsing of chord and sequence strings
//! - Whitelist validation of key and modifier tokens
//! - The set of sequences the application may simulate
//! - Conflict detection between binding forms
//!
//! Nothing here is async or shared; the dispatch module builds on it.

pub mod conflict;
pub mod parser;
pub mod simulated;
pub mod types;
pub mod validator;

pub use conflict::{Conflict, ConflictDetector};
pub use parser::ParseError;
pub use simulated::SimulatedKeySet;
pub use types::*;
pub use validator::ValidationError;

#[cfg(test)]
mod tests;
