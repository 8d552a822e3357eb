//! Configuration module tests
//!
//! Contains test suites for keymap loading:
//! - File handling and path expansion
//! - Binding parsing and validation
