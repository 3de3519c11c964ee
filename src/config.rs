mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{ClipboardBackend, ClipboardConfig, CompletionConfig, Config, HistoryConfig};
