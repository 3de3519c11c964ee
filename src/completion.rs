//! Completion sources and the debounced pass that drives them
//!
//! Each source decides for itself whether the current input concerns it.
//! The registry holds the active sources in a fixed order, and the first
//! source that is showing and has a selected option supplies the completion.

pub mod completion_render;
mod excmd_source;
mod history_source;
mod registry;
mod scheduler;
mod selection;
mod source;

pub use excmd_source::{DEFAULT_EXCMDS, ExcmdSource};
pub use history_source::HistorySource;
pub use registry::{CompletionRegistry, SourceFactory, default_sources};
pub use scheduler::{CompletionScheduler, FilterListener};
pub use selection::OptionList;
pub use source::{CompletionError, CompletionSource, SourceState};
