use crate::core::{ConflictDetector, KeySequence};

/// Helper to create test sequences
fn seq(s: &str) -> KeySequence {
    s.parse().unwrap()
}

#[test]
fn test_no_conflicts_when_empty() {
    let detector = ConflictDetector::new();
    assert_eq!(detector.find_conflicts().len(), 0);
    assert_eq!(detector.total_sequences(), 0);
}

#[test]
fn test_no_conflicts_with_unique_sequences() {
    let mut detector = ConflictDetector::new();

    detector.add_sequence(seq("g g"));
    detector.add_sequence(seq("j"));
    detector.add_sequence(seq("alt+j"));

    assert!(detector.find_conflicts().is_empty());
    assert_eq!(detector.total_sequences(), 3);
}

#[test]
fn test_capital_conflicts_with_shifted_lowercase() {
    let mut detector = ConflictDetector::new();

    detector.add_sequence(seq("G"));
    detector.add_sequence(seq("shift+g"));

    let conflicts = detector.find_conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].form, "shift+g");
    assert_eq!(conflicts[0].sequences.len(), 2);
    assert!(detector.has_conflict("shift+g"));
    assert!(!detector.has_conflict("G"));
}

#[test]
fn test_same_sequence_twice_is_not_a_conflict() {
    let mut detector = ConflictDetector::new();

    detector.add_sequence(seq("g g"));
    detector.add_sequence(seq("g g"));

    assert!(detector.find_conflicts().is_empty());
    assert_eq!(detector.total_sequences(), 2);
}

#[test]
fn test_conflicts_are_sorted_by_form() {
    let mut detector = ConflictDetector::new();

    detector.add_sequence(seq("J"));
    detector.add_sequence(seq("shift+j"));
    detector.add_sequence(seq("D"));
    detector.add_sequence(seq("shift+D"));

    let forms: Vec<_> = detector
        .find_conflicts()
        .into_iter()
        .map(|c| c.form)
        .collect();
    assert_eq!(forms, vec!["shift+d", "shift+j"]);
}
