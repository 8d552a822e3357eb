//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (KeyChord, KeySequence, binding forms)
//! - Parser tests (chord and sequence strings)
//! - Validation tests
//! - Conflict detection tests
//! - Simulated key set tests

#[cfg(test)]
mod conflict_tests;
#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod validator_tests;
