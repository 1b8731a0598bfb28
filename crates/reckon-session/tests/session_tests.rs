//! Session controller integration tests.
//!
//! Exercises the full trigger behavior table: append, delete, clear,
//! equals (success, failure, empty), chaining, and the keyboard path.

use reckon_session::{DisplaySink, Input, Session};
use reckon_types::CalcError;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn type_in(session: &mut Session, text: &str) -> String {
    let mut last = session.display();
    for ch in text.chars() {
        let input = Input::literal(ch).unwrap_or_else(|| panic!("bad literal {ch:?}"));
        last = session.handle(input);
    }
    last
}

/// Drive a session by key names, collecting every display update.
fn press_keys(session: &mut Session, keys: &[&str]) -> Vec<String> {
    let mut shown = Vec::new();
    for key in keys {
        if let Some(input) = Input::from_key(key) {
            shown.push(session.handle(input));
        }
    }
    shown
}

// ─────────────────────────────────────────────────────────────────────
// Behavior table
// ─────────────────────────────────────────────────────────────────────

#[test]
fn append_displays_buffer() {
    let mut s = Session::new();
    assert_eq!(type_in(&mut s, "12+3"), "12+3");
}

#[test]
fn delete_removes_last_character() {
    let mut s = Session::new();
    type_in(&mut s, "12+");
    assert_eq!(s.handle(Input::Delete), "12");
    assert_eq!(s.handle(Input::Delete), "1");
    assert_eq!(s.handle(Input::Delete), "0");
    // Deleting past empty stays at the empty display
    assert_eq!(s.handle(Input::Delete), "0");
}

#[test]
fn clear_resets_buffer_and_last_result() {
    let mut s = Session::new();
    type_in(&mut s, "2+2");
    s.handle(Input::Equals);
    assert_eq!(s.last_result(), Some("4"));

    assert_eq!(s.handle(Input::Clear), "0");
    assert_eq!(s.buffer(), "");
    assert_eq!(s.last_result(), None);
}

#[test]
fn equals_success_displays_result() {
    let mut s = Session::new();
    type_in(&mut s, "2+2");
    assert_eq!(s.handle(Input::Equals), "4");
}

#[test]
fn equals_failure_displays_error_and_resets() {
    let mut s = Session::new();
    type_in(&mut s, "5/0");
    assert_eq!(s.handle(Input::Equals), "Error");
    assert_eq!(s.buffer(), "");
    // The display text collapses, but the classification survives
    assert!(s.last_error().is_some_and(CalcError::is_math));

    type_in(&mut s, "2+*3");
    assert_eq!(s.handle(Input::Equals), "Error");
    assert!(s.last_error().is_some_and(CalcError::is_evaluation));
}

#[test]
fn equals_on_empty_buffer_is_a_no_op() {
    let mut s = Session::new();
    assert_eq!(s.handle(Input::Equals), "0");
    assert_eq!(s.buffer(), "");
    assert_eq!(s.last_result(), None);
}

// ─────────────────────────────────────────────────────────────────────
// Chaining
// ─────────────────────────────────────────────────────────────────────

#[test]
fn chaining_from_last_result() {
    let mut s = Session::new();
    type_in(&mut s, "8");
    assert_eq!(s.handle(Input::Equals), "8");
    type_in(&mut s, "+2");
    assert_eq!(s.handle(Input::Equals), "10");
}

#[test]
fn chaining_through_percent_result() {
    let mut s = Session::new();
    type_in(&mut s, "50%");
    assert_eq!(s.handle(Input::Equals), "0.5");
    type_in(&mut s, "*4");
    assert_eq!(s.handle(Input::Equals), "2");
}

#[test]
fn repeated_equals_is_stable() {
    let mut s = Session::new();
    type_in(&mut s, "6*7");
    assert_eq!(s.handle(Input::Equals), "42");
    assert_eq!(s.handle(Input::Equals), "42");
    assert_eq!(s.handle(Input::Equals), "42");
}

// ─────────────────────────────────────────────────────────────────────
// Keyboard path
// ─────────────────────────────────────────────────────────────────────

#[test]
fn keyboard_sequence_matches_button_sequence() {
    let mut s = Session::new();
    let shown = press_keys(&mut s, &["1", "0", "/", "4", "Enter"]);
    assert_eq!(shown.last().map(String::as_str), Some("2.5"));
}

#[test]
fn keyboard_ignores_modifier_keys() {
    let mut s = Session::new();
    let shown = press_keys(&mut s, &["Shift", "2", "Control", "+", "2", "Tab", "="]);
    assert_eq!(shown, vec!["2", "2+", "2+2", "4"]);
}

#[test]
fn escape_clears_and_backspace_deletes() {
    let mut s = Session::new();
    press_keys(&mut s, &["9", "9", "Backspace"]);
    assert_eq!(s.buffer(), "9");
    press_keys(&mut s, &["Escape"]);
    assert_eq!(s.buffer(), "");
    assert_eq!(s.display(), "0");
}

// ─────────────────────────────────────────────────────────────────────
// Display sink
// ─────────────────────────────────────────────────────────────────────

#[test]
fn sink_receives_every_update() {
    struct Recorder(Vec<String>);
    impl DisplaySink for Recorder {
        fn show(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    let mut s = Session::new();
    let mut sink = Recorder(Vec::new());
    for input in [
        Input::Literal('2'),
        Input::Literal('+'),
        Input::Literal('2'),
        Input::Equals,
        Input::Clear,
    ] {
        s.dispatch(input, &mut sink);
    }
    assert_eq!(sink.0, vec!["2", "2+", "2+2", "4", "0"]);
}
