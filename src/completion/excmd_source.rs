use async_trait::async_trait;

use super::selection::OptionList;
use super::source::{CompletionError, CompletionSource, SourceState};

/// Ex-commands offered when no other list is given
pub const DEFAULT_EXCMDS: &[&str] = &[
    "back",
    "bind",
    "buffer",
    "clipboard",
    "fillcmdline",
    "forward",
    "help",
    "open",
    "quit",
    "reload",
    "set",
    "source",
    "tabclose",
    "tabopen",
    "unbind",
    "winopen",
];

/// Completes the command word itself
///
/// Shows while the input is a single word; hides as soon as an argument
/// starts.
#[derive(Debug)]
pub struct ExcmdSource {
    commands: Vec<String>,
    max_results: usize,
    list: OptionList,
}

impl ExcmdSource {
    pub fn new(commands: Vec<String>, max_results: usize) -> Self {
        Self {
            commands,
            max_results,
            list: OptionList::new(),
        }
    }

    pub fn with_defaults(max_results: usize) -> Self {
        Self::new(
            DEFAULT_EXCMDS.iter().map(|c| c.to_string()).collect(),
            max_results,
        )
    }
}

#[async_trait]
impl CompletionSource for ExcmdSource {
    fn title(&self) -> &str {
        "Ex commands"
    }

    async fn filter(&self, query: &str) -> Result<(), CompletionError> {
        let word = query.trim_start();
        if word.contains(char::is_whitespace) {
            self.list.hide();
            return Ok(());
        }

        let mut options: Vec<String> = self
            .commands
            .iter()
            .filter(|command| command.starts_with(word))
            .cloned()
            .collect();
        options.sort();
        options.truncate(self.max_results);

        self.list.show(options);
        Ok(())
    }

    fn next(&self) {
        self.list.select_next();
    }

    fn prev(&self) {
        self.list.select_prev();
    }

    fn completion(&self) -> Option<String> {
        self.list.selected_option()
    }

    fn clear_completion(&self) {
        self.list.clear_selection();
    }

    fn state(&self) -> SourceState {
        self.list.state()
    }

    fn options(&self) -> Vec<String> {
        self.list.options()
    }

    fn selected(&self) -> Option<usize> {
        self.list.selected()
    }
}

#[cfg(test)]
#[path = "excmd_source_tests.rs"]
mod excmd_source_tests;
