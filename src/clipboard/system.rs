//! System clipboard backend
//!
//! Provides clipboard access via the operating system's native clipboard API
//! using the arboard crate. Headless environments report `SystemUnavailable`.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to system clipboard using arboard
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

/// Read text from system clipboard using arboard
pub fn paste() -> ClipboardResult<String> {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard.get_text().map_err(|_| ClipboardError::ReadError)
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
