//! Prefix-filtered history recall
//!
//! The cursor remembers what the user had typed when navigation began and
//! steps through the history entries that start with it. Stepping is
//! relative and clamped at both ends of the match list: one end is the
//! oldest match, the other is the saved draft.

/// History entries starting with `prefix`, oldest first
pub fn prefix_matches<'a>(history: &'a [String], prefix: &str) -> Vec<&'a str> {
    history
        .iter()
        .map(String::as_str)
        .filter(|entry| entry.starts_with(prefix))
        .collect()
}

/// Navigation state over the command history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    search_prefix: Option<String>,
    /// Steps back from the draft; 0 shows the draft
    position: usize,
    draft: String,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `n` entries through the matches and return the text to show
    ///
    /// Negative `n` moves toward older entries, positive toward newer ones
    /// and finally back to the draft. A step that would overshoot either end
    /// shows the end it hit but leaves the position untouched, so a single
    /// step in the other direction always leaves the boundary again.
    pub fn step(&mut self, n: i64, current: &str, history: &[String]) -> String {
        if self.position == 0 {
            self.draft = current.to_string();
        }
        let prefix = self
            .search_prefix
            .get_or_insert_with(|| current.to_string());

        let matches = prefix_matches(history, prefix);
        let len = matches.len() as i64;
        let candidate = len.saturating_add(n).saturating_sub(self.position as i64);
        let index = candidate.clamp(0, len);

        let text = if index < len {
            matches[index as usize].to_string()
        } else {
            self.draft.clone()
        };

        if index == candidate {
            // candidate in [0, len] keeps position in [0, len]
            self.position = (len - candidate) as usize;
        }

        text
    }

    pub fn reset(&mut self) {
        self.search_prefix = None;
        self.position = 0;
        self.draft.clear();
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn search_prefix(&self) -> Option<&str> {
        self.search_prefix.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_navigating(&self) -> bool {
        self.position != 0
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
