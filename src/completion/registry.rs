use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::excmd_source::ExcmdSource;
use super::history_source::HistorySource;
use super::source::{CompletionSource, SourceState};
use crate::config::CompletionConfig;
use crate::history::CommandHistory;

/// Builds a fresh, ordered list of completion sources
pub type SourceFactory = Arc<dyn Fn() -> Vec<Arc<dyn CompletionSource>> + Send + Sync>;

type SourceList = Vec<Arc<dyn CompletionSource>>;

/// The sources the command line uses by default, in priority order
pub fn default_sources(config: &CompletionConfig, history: CommandHistory) -> SourceFactory {
    let max_results = config.max_results;
    Arc::new(move || {
        vec![
            Arc::new(ExcmdSource::with_defaults(max_results)) as Arc<dyn CompletionSource>,
            Arc::new(HistorySource::new(history.clone(), max_results)),
        ]
    })
}

/// The active completion sources, created on first use
///
/// Clones share the same list.
#[derive(Clone)]
pub struct CompletionRegistry {
    factory: SourceFactory,
    active: Arc<Mutex<Option<SourceList>>>,
}

impl CompletionRegistry {
    pub fn new(factory: SourceFactory) -> Self {
        Self {
            factory,
            active: Arc::new(Mutex::new(None)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<SourceList>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create the source list if there is none yet and return it
    pub fn enable(&self) -> SourceList {
        let mut active = self.lock();
        if active.is_none() {
            let sources = (self.factory)();
            log::debug!("Enabled {} completion sources", sources.len());
            *active = Some(sources);
        }
        active.clone().unwrap_or_default()
    }

    /// Drop the source list; the next pass builds a new one
    pub fn disable(&self) {
        *self.lock() = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().is_some()
    }

    /// Snapshot of the active sources, empty when disabled
    pub fn sources(&self) -> SourceList {
        self.lock().clone().unwrap_or_default()
    }

    /// The selection of the first showing source that has one
    pub fn completion(&self) -> Option<String> {
        self.sources().iter().find_map(|source| {
            if source.state() != SourceState::Normal {
                return None;
            }
            source.completion().filter(|c| !c.is_empty())
        })
    }

    pub fn next_all(&self) {
        for source in self.sources() {
            source.next();
        }
    }

    pub fn prev_all(&self) {
        for source in self.sources() {
            source.prev();
        }
    }

    pub fn clear_completions(&self) {
        for source in self.sources() {
            source.clear_completion();
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
