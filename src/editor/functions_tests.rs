//! Tests for editor/functions

use super::*;

fn input_at(text: &str, col: usize) -> InputState {
    let mut input = InputState::new();
    input.replace(text, col);
    input
}

fn run(function: &str, text: &str, col: usize) -> (String, usize) {
    let mut input = input_at(text, col);
    let function: EditorFunction = function.parse().unwrap();
    function.apply(&mut input);
    (input.text().to_string(), input.cursor())
}

#[test]
fn test_every_name_parses_back() {
    for function in EditorFunction::ALL {
        assert_eq!(function.name().parse::<EditorFunction>(), Ok(function));
        assert_eq!(function.to_string(), function.name());
    }
}

#[test]
fn test_unknown_name_is_rejected() {
    let err = "launch_missiles".parse::<EditorFunction>().unwrap_err();
    assert!(err.contains("launch_missiles"));
}

#[test]
fn test_line_motions() {
    assert_eq!(run("beginning_of_line", "open x", 4), ("open x".to_string(), 0));
    assert_eq!(run("end_of_line", "open x", 0), ("open x".to_string(), 6));
    assert_eq!(run("forward_char", "open x", 0), ("open x".to_string(), 1));
    assert_eq!(run("backward_char", "open x", 3), ("open x".to_string(), 2));
}

#[test]
fn test_word_motions() {
    assert_eq!(run("forward_word", "open example.com", 0).1, 4);
    assert_eq!(run("backward_word", "open example.com", 16).1, 13);
}

#[test]
fn test_char_deletion() {
    assert_eq!(run("delete_char", "open", 0), ("pen".to_string(), 0));
    assert_eq!(run("delete_backward_char", "open", 4), ("ope".to_string(), 3));
}

#[test]
fn test_line_kills() {
    assert_eq!(run("kill_line", "open example", 4).0, "open");
    assert_eq!(run("backward_kill_line", "open example", 5), ("example".to_string(), 0));
    assert_eq!(run("kill_whole_line", "open example", 3), (String::new(), 0));
}

#[test]
fn test_word_kills() {
    assert_eq!(run("kill_word", "open example.com", 4), ("open.com".to_string(), 4));
    assert_eq!(run("backward_kill_word", "open example", 12), ("open ".to_string(), 5));
}

#[test]
fn test_transpose_and_case() {
    assert_eq!(run("transpose_chars", "opne", 3), ("open".to_string(), 4));
    assert_eq!(run("upcase_word", "set foo", 3).0, "set FOO");
    assert_eq!(run("downcase_word", "OPEN", 0).0, "open");
    assert_eq!(run("capitalize_word", "help me", 0).0, "Help me");
}

#[test]
fn test_apply_reports_change() {
    let mut input = input_at("open", 4);
    assert!(!EditorFunction::BeginningOfLine.apply(&mut input));
    assert!(EditorFunction::KillLine.apply(&mut input));
    assert_eq!(input.text(), "");
}
