//! Clipboard backend selection and error types
//!
//! This module provides the main entry point for clipboard operations,
//! selecting the appropriate backend based on configuration.

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult<T = ()> = Result<T, ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// System clipboard is not available
    #[error("system clipboard is not available")]
    SystemUnavailable,
    /// Error writing to clipboard
    #[error("failed to copy to clipboard")]
    WriteError,
    /// Error reading from clipboard
    #[error("failed to read clipboard")]
    ReadError,
    /// The selected backend cannot read the clipboard
    #[error("clipboard backend does not support reading")]
    ReadUnsupported,
}

/// Copy text to clipboard using the specified backend
///
/// # Backend Selection
/// - `System`: Uses only the OS clipboard API (via arboard)
/// - `Osc52`: Uses only OSC 52 escape sequences
/// - `Auto`: Tries system clipboard first, falls back to OSC 52 if unavailable
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}

/// Read text from the clipboard using the specified backend
///
/// OSC 52 is write-only here; `Auto` reads from the system clipboard.
pub fn read_from_clipboard(backend: ClipboardBackend) -> ClipboardResult<String> {
    match backend {
        ClipboardBackend::Osc52 => Err(ClipboardError::ReadUnsupported),
        ClipboardBackend::System | ClipboardBackend::Auto => system::paste(),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
