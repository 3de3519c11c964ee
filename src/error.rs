use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Custom error types for cmdframe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CmdframeError {
    #[error("No command-line function named {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for {command}: {reason}")]
    InvalidArguments { command: String, reason: String },

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Message channel closed: {0}")]
    ChannelClosed(&'static str),
}

impl From<std::io::Error> for CmdframeError {
    fn from(err: std::io::Error) -> Self {
        CmdframeError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CmdframeError {
    fn from(err: toml::de::Error) -> Self {
        CmdframeError::Config(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, CmdframeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
