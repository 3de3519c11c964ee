use std::sync::{Mutex, MutexGuard, PoisonError};

use super::source::SourceState;

#[derive(Debug, Default)]
struct ListInner {
    state: SourceState,
    options: Vec<String>,
    selected: Option<usize>,
}

/// Options of one source plus the cursor over them
///
/// Shared by the concrete sources; every method takes `&self`.
#[derive(Debug, Default)]
pub struct OptionList {
    inner: Mutex<ListInner>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ListInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show `options` and drop any selection
    pub fn show(&self, options: Vec<String>) {
        let mut list = self.lock();
        list.state = SourceState::Normal;
        list.options = options;
        list.selected = None;
    }

    pub fn hide(&self) {
        let mut list = self.lock();
        list.state = SourceState::Hidden;
        list.options.clear();
        list.selected = None;
    }

    pub fn select_next(&self) {
        let mut list = self.lock();
        let len = list.options.len();
        if len == 0 {
            return;
        }
        list.selected = Some(match list.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev(&self) {
        let mut list = self.lock();
        let len = list.options.len();
        if len == 0 {
            return;
        }
        list.selected = Some(match list.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }

    pub fn clear_selection(&self) {
        self.lock().selected = None;
    }

    pub fn selected_option(&self) -> Option<String> {
        let list = self.lock();
        list.selected.and_then(|i| list.options.get(i).cloned())
    }

    pub fn selected(&self) -> Option<usize> {
        self.lock().selected
    }

    pub fn options(&self) -> Vec<String> {
        self.lock().options.clone()
    }

    pub fn state(&self) -> SourceState {
        self.lock().state
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
