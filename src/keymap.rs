//! Key bindings of the command line
//!
//! Keys not bound here fall through to the text input.

use std::collections::HashMap;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::editor::EditorFunction;
use crate::messaging::FrameCommand;

type KeyChord = (KeyCode, KeyModifiers);

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyChord, FrameCommand>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, command: FrameCommand) {
        self.bindings.insert(normalize(code, modifiers), command);
    }

    pub fn lookup(&self, key: &KeyEvent) -> Option<&FrameCommand> {
        self.bindings.get(&normalize(key.code, key.modifiers))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let alt = KeyModifiers::ALT;

        let mut keymap = Keymap::empty();
        keymap.bind(KeyCode::Enter, none, FrameCommand::Process);
        keymap.bind(KeyCode::Esc, none, FrameCommand::HideAndClear);
        keymap.bind(KeyCode::Char('c'), ctrl, FrameCommand::HideAndClear);
        keymap.bind(KeyCode::Up, none, FrameCommand::History(-1));
        keymap.bind(KeyCode::Down, none, FrameCommand::History(1));
        keymap.bind(KeyCode::Tab, none, FrameCommand::NextCompletion);
        keymap.bind(KeyCode::BackTab, none, FrameCommand::PrevCompletions);
        keymap.bind(KeyCode::Char(' '), none, FrameCommand::InsertCompletionOrSpace);

        let editing = [
            (KeyCode::Char('a'), ctrl, EditorFunction::BeginningOfLine),
            (KeyCode::Char('e'), ctrl, EditorFunction::EndOfLine),
            (KeyCode::Char('f'), ctrl, EditorFunction::ForwardChar),
            (KeyCode::Char('b'), ctrl, EditorFunction::BackwardChar),
            (KeyCode::Char('h'), ctrl, EditorFunction::DeleteBackwardChar),
            (KeyCode::Char('d'), ctrl, EditorFunction::DeleteChar),
            (KeyCode::Char('k'), ctrl, EditorFunction::KillLine),
            (KeyCode::Char('u'), ctrl, EditorFunction::BackwardKillLine),
            (KeyCode::Char('w'), ctrl, EditorFunction::BackwardKillWord),
            (KeyCode::Char('t'), ctrl, EditorFunction::TransposeChars),
            (KeyCode::Char('f'), alt, EditorFunction::ForwardWord),
            (KeyCode::Char('b'), alt, EditorFunction::BackwardWord),
            (KeyCode::Char('d'), alt, EditorFunction::KillWord),
            (KeyCode::Char('u'), alt, EditorFunction::UpcaseWord),
            (KeyCode::Char('l'), alt, EditorFunction::DowncaseWord),
            (KeyCode::Char('c'), alt, EditorFunction::CapitalizeWord),
        ];
        for (code, modifiers, function) in editing {
            keymap.bind(code, modifiers, FrameCommand::EditorFunction(function.name().to_string()));
        }

        keymap
    }
}

/// Terminals report Shift inconsistently for characters and BackTab
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyChord {
    let mut modifiers = modifiers;
    if matches!(code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    (code, modifiers)
}

#[cfg(test)]
#[path = "keymap_tests.rs"]
mod keymap_tests;
