//! Binding form conflict detection
//!
//! Two configured sequences conflict when they register the same literal
//! binding form with the listener. This is easy to miss because of capital
//! normalisation: `G` registers `G` and `shift+g`, so it collides with a
//! separately configured `shift+G` or `shift+g`.
//!
//! # Performance
//! - Add sequence: O(f) where f = number of binding forms (1 or 2)
//! - Check conflict: O(1) average case
//! - List all conflicts: O(n log n) where n = number of unique forms

use std::collections::HashMap;
use crate::core::types::KeySequence;

/// Indexes sequences by the binding forms they register.
///
/// A conflict exists when any form maps to two or more distinct sequences.
pub struct ConflictDetector {
    /// Maps binding form to every sequence registering it.
    forms: HashMap<String, Vec<KeySequence>>,
    total: usize,
}

/// A binding form claimed by more than one sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The literal form registered with the listener
    pub form: String,

    /// All sequences producing this form (always 2 or more)
    pub sequences: Vec<KeySequence>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            forms: HashMap::new(),
            total: 0,
        }
    }

    /// Adds a sequence under each of its binding forms.
    pub fn add_sequence(&mut self, sequence: KeySequence) {
        for form in sequence.to_binding_forms() {
            let entry = self.forms.entry(form).or_default();
            if !entry.contains(&sequence) {
                entry.push(sequence.clone());
            }
        }
        self.total += 1;
    }

    /// Finds all conflicts, ordered by form.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .forms
            .iter()
            .filter(|(_, sequences)| sequences.len() > 1)
            .map(|(form, sequences)| Conflict {
                form: form.clone(),
                sequences: sequences.clone(),
            })
            .collect();

        conflicts.sort_by(|a, b| a.form.cmp(&b.form));
        conflicts
    }

    /// Returns true if this form is registered by 2 or more sequences.
    pub fn has_conflict(&self, form: &str) -> bool {
        self.forms
            .get(form)
            .map(|sequences| sequences.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of sequences added.
    pub fn total_sequences(&self) -> usize {
        self.total
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
