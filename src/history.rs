mod command_log;
mod navigator;
pub mod storage;

pub use command_log::{CommandHistory, is_private_command};
pub use navigator::{HistoryCursor, prefix_matches};
