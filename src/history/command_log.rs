use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide log of submitted command lines, oldest first
///
/// Clones share the same log, so every holder sees every append.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Arc<RwLock<Vec<String>>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn push(&self, command: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command.into());
    }

    /// Snapshot of the log
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Commands that open private windows never enter the history
pub fn is_private_command(command: &str) -> bool {
    let mut words = command.split_whitespace();
    matches!(
        (words.next(), words.next()),
        (Some("winopen"), Some("-private"))
    )
}

#[cfg(test)]
#[path = "command_log_tests.rs"]
mod command_log_tests;
