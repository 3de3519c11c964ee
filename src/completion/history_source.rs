use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::selection::OptionList;
use super::source::{CompletionError, CompletionSource, SourceState};
use crate::history::CommandHistory;

/// Commands whose argument is completed from earlier submissions
const URL_COMMANDS: &[&str] = &["open", "tabopen", "winopen"];

/// Recalls earlier arguments of the open-family commands
///
/// Options are whole command lines from the history that use the same
/// command, ranked by how well their argument fuzzy-matches the typed one.
/// Ties keep the newest entry first.
pub struct HistorySource {
    history: CommandHistory,
    matcher: SkimMatcherV2,
    max_results: usize,
    list: OptionList,
}

impl fmt::Debug for HistorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistorySource")
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl HistorySource {
    pub fn new(history: CommandHistory, max_results: usize) -> Self {
        Self {
            history,
            matcher: SkimMatcherV2::default(),
            max_results,
            list: OptionList::new(),
        }
    }

    fn rank(&self, command: &str, argument: &str) -> Vec<String> {
        let entries = self.history.entries();
        let mut seen = HashSet::new();

        let mut scored: Vec<(i64, &String)> = entries
            .iter()
            .rev()
            .filter(|entry| seen.insert(entry.as_str()))
            .filter_map(|entry| {
                let (entry_command, entry_argument) = split_command(entry)?;
                if entry_command != command {
                    return None;
                }
                if argument.is_empty() {
                    return Some((0, entry));
                }
                self.matcher
                    .fuzzy_match(entry_argument, argument)
                    .map(|score| (score, entry))
            })
            .collect();

        // Stable sort keeps newest-first order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(self.max_results)
            .map(|(_, entry)| entry.clone())
            .collect()
    }
}

/// Split "cmd arg..." into the command word and the rest, trimmed
fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    let split = line.find(char::is_whitespace)?;
    Some((&line[..split], line[split..].trim()))
}

#[async_trait]
impl CompletionSource for HistorySource {
    fn title(&self) -> &str {
        "History"
    }

    async fn filter(&self, query: &str) -> Result<(), CompletionError> {
        match split_command(query) {
            Some((command, argument)) if URL_COMMANDS.contains(&command) => {
                let options = self.rank(command, argument);
                self.list.show(options);
            }
            _ => self.list.hide(),
        }
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
#[path = "history_source_tests.rs"]
mod history_source_tests;
