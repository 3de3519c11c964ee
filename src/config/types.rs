// Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default quiescence window before a completion pass starts
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Default number of options a completion source keeps after filtering
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Default number of history entries kept on disk
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 1000;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Completion configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// History configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Whether submitted commands are saved between sessions
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            max_entries: DEFAULT_MAX_HISTORY_ENTRIES,
            persist: true,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_HISTORY_ENTRIES
}

fn default_persist() -> bool {
    true
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}
