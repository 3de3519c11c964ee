use std::fmt;
use std::str::FromStr;

use tui_textarea::CursorMove;

use super::words::{self, WordCase};
use crate::input::InputState;

/// Named text-editing operations callable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFunction {
    BeginningOfLine,
    EndOfLine,
    ForwardChar,
    BackwardChar,
    ForwardWord,
    BackwardWord,
    DeleteChar,
    DeleteBackwardChar,
    KillLine,
    BackwardKillLine,
    KillWholeLine,
    KillWord,
    BackwardKillWord,
    TransposeChars,
    UpcaseWord,
    DowncaseWord,
    CapitalizeWord,
}

impl EditorFunction {
    pub const ALL: [EditorFunction; 17] = [
        EditorFunction::BeginningOfLine,
        EditorFunction::EndOfLine,
        EditorFunction::ForwardChar,
        EditorFunction::BackwardChar,
        EditorFunction::ForwardWord,
        EditorFunction::BackwardWord,
        EditorFunction::DeleteChar,
        EditorFunction::DeleteBackwardChar,
        EditorFunction::KillLine,
        EditorFunction::BackwardKillLine,
        EditorFunction::KillWholeLine,
        EditorFunction::KillWord,
        EditorFunction::BackwardKillWord,
        EditorFunction::TransposeChars,
        EditorFunction::UpcaseWord,
        EditorFunction::DowncaseWord,
        EditorFunction::CapitalizeWord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EditorFunction::BeginningOfLine => "beginning_of_line",
            EditorFunction::EndOfLine => "end_of_line",
            EditorFunction::ForwardChar => "forward_char",
            EditorFunction::BackwardChar => "backward_char",
            EditorFunction::ForwardWord => "forward_word",
            EditorFunction::BackwardWord => "backward_word",
            EditorFunction::DeleteChar => "delete_char",
            EditorFunction::DeleteBackwardChar => "delete_backward_char",
            EditorFunction::KillLine => "kill_line",
            EditorFunction::BackwardKillLine => "backward_kill_line",
            EditorFunction::KillWholeLine => "kill_whole_line",
            EditorFunction::KillWord => "kill_word",
            EditorFunction::BackwardKillWord => "backward_kill_word",
            EditorFunction::TransposeChars => "transpose_chars",
            EditorFunction::UpcaseWord => "upcase_word",
            EditorFunction::DowncaseWord => "downcase_word",
            EditorFunction::CapitalizeWord => "capitalize_word",
        }
    }

    /// Run the operation; returns whether the text changed
    pub fn apply(self, input: &mut InputState) -> bool {
        let before = input.text().to_string();
        let chars: Vec<char> = before.chars().collect();
        let col = input.cursor().min(chars.len());

        match self {
            EditorFunction::BeginningOfLine => input.textarea.move_cursor(CursorMove::Head),
            EditorFunction::EndOfLine => input.textarea.move_cursor(CursorMove::End),
            EditorFunction::ForwardChar => input.textarea.move_cursor(CursorMove::Forward),
            EditorFunction::BackwardChar => input.textarea.move_cursor(CursorMove::Back),
            EditorFunction::ForwardWord => input.set_cursor(words::next_word_end(&chars, col)),
            EditorFunction::BackwardWord => input.set_cursor(words::prev_word_start(&chars, col)),
            EditorFunction::DeleteChar => {
                input.textarea.delete_next_char();
            }
            EditorFunction::DeleteBackwardChar => {
                input.textarea.delete_char();
            }
            EditorFunction::KillLine => {
                input.textarea.delete_line_by_end();
            }
            EditorFunction::BackwardKillLine => {
                input.textarea.delete_line_by_head();
            }
            EditorFunction::KillWholeLine => input.set_text(""),
            EditorFunction::KillWord => {
                let end = words::next_word_end(&chars, col);
                let (text, col) = words::delete_range(&chars, col, end);
                input.replace(&text, col);
            }
            EditorFunction::BackwardKillWord => {
                let start = words::prev_word_start(&chars, col);
                let (text, col) = words::delete_range(&chars, start, col);
                input.replace(&text, col);
            }
            EditorFunction::TransposeChars => {
                let (text, col) = words::transpose_chars(&chars, col);
                input.replace(&text, col);
            }
            EditorFunction::UpcaseWord => change_case(input, &chars, col, WordCase::Upper),
            EditorFunction::DowncaseWord => change_case(input, &chars, col, WordCase::Lower),
            EditorFunction::CapitalizeWord => {
                change_case(input, &chars, col, WordCase::Capitalized)
            }
        }

        input.text() != before
    }
}

fn change_case(input: &mut InputState, chars: &[char], col: usize, case: WordCase) {
    let (text, col) = words::change_word_case(chars, col, case);
    input.replace(&text, col);
}

impl fmt::Display for EditorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditorFunction {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        EditorFunction::ALL
            .into_iter()
            .find(|function| function.name() == name)
            .ok_or_else(|| format!("No editor function named {}!", name))
    }
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod functions_tests;
