use crate::core::types::{KeyChord, KeySequence, Modifier};

fn chord(s: &str) -> KeyChord {
    s.parse().unwrap()
}

fn forms(s: &str) -> Vec<String> {
    s.parse::<KeySequence>().unwrap().to_binding_forms()
}

#[test]
fn test_capital_becomes_shift_and_lowercase() {
    assert_eq!(chord("G").normalize_capital().to_string(), "shift+g");
}

#[test]
fn test_normalize_keeps_other_modifiers() {
    assert_eq!(chord("alt+G").normalize_capital().to_string(), "alt+shift+g");
}

#[test]
fn test_normalize_leaves_lowercase_alone() {
    assert_eq!(chord("g").normalize_capital().to_string(), "g");
    assert_eq!(chord("Escape").normalize_capital().to_string(), "Escape");
}

#[test]
fn test_normalize_is_idempotent() {
    for s in ["G", "alt+G", "shift+G", "g", "control+x", "Escape", "F1"] {
        let once = chord(s).normalize_capital();
        assert_eq!(once.normalize_capital(), once, "not idempotent for {s}");
    }
}

#[test]
fn test_normalize_with_existing_shift() {
    let normalized = chord("shift+G").normalize_capital();
    assert_eq!(normalized.to_string(), "shift+g");
    assert!(normalized.has_modifier(Modifier::Shift));
}

#[test]
fn test_canonical_chord_round_trips() {
    for s in ["g", "D", "alt+shift+g", "control+command+Escape", "shift+/"] {
        assert_eq!(chord(s).to_string(), s);
    }
}

#[test]
fn test_modifiers_print_in_canonical_order() {
    assert_eq!(chord("command+shift+Alt+k").to_string(), "alt+shift+command+k");
    assert_eq!(chord("Ctrl+x").to_string(), "control+x");
}

#[test]
fn test_capital_single_chord_has_two_forms() {
    assert_eq!(forms("G"), vec!["G", "shift+g"]);
    assert_eq!(forms("alt+D"), vec!["alt+D", "alt+shift+d"]);
}

#[test]
fn test_lowercase_single_chord_has_one_form() {
    assert_eq!(forms("g"), vec!["g"]);
    assert_eq!(forms("Escape"), vec!["Escape"]);
}

#[test]
fn test_multi_chord_sequence_is_normalized_once() {
    assert_eq!(forms("g g"), vec!["g g"]);
    assert_eq!(forms("g G"), vec!["g shift+g"]);
    assert_eq!(forms("G G"), vec!["shift+g shift+g"]);
}

#[test]
fn test_uses_multiple_chords() {
    assert!(!"g".parse::<KeySequence>().unwrap().uses_multiple_chords());
    assert!("g g".parse::<KeySequence>().unwrap().uses_multiple_chords());
}

#[test]
fn test_sequence_display_joins_with_space() {
    let sequence: KeySequence = "control+x alt+S".parse().unwrap();
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence.to_string(), "control+x alt+S");
}

#[test]
fn test_serde_uses_canonical_strings() {
    let sequence: KeySequence = "shift+alt+k j".parse().unwrap();
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, "\"alt+shift+k j\"");

    let back: KeySequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sequence);

    assert!(serde_json::from_str::<KeyChord>("\"alt+\"").is_err());
}
