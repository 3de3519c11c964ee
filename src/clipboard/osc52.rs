//! Terminal clipboard writes through OSC 52
//!
//! The sequence goes to stdout, so the terminal hosting the command line
//! stores the text. Inside tmux it is wrapped in a DCS passthrough block,
//! otherwise tmux swallows it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

const ESC: u8 = 0x1b;

pub fn copy(text: &str) -> ClipboardResult {
    let in_tmux = std::env::var_os("TMUX").is_some();
    let mut stdout = io::stdout().lock();

    write_sequence(&mut stdout, text, in_tmux)
        .and_then(|()| stdout.flush())
        .map_err(|e| {
            log::warn!("OSC 52 write failed: {}", e);
            ClipboardError::WriteError
        })
}

/// Write the clipboard sequence for `text`, wrapped for tmux when asked
pub fn write_sequence<W: Write>(w: &mut W, text: &str, in_tmux: bool) -> io::Result<()> {
    let sequence = encode_osc52(text);
    if !in_tmux {
        return w.write_all(sequence.as_bytes());
    }

    w.write_all(b"\x1bPtmux;")?;
    for &byte in sequence.as_bytes() {
        if byte == ESC {
            w.write_all(&[ESC, ESC])?;
        } else {
            w.write_all(&[byte])?;
        }
    }
    w.write_all(b"\x1b\\")
}

/// Wrap `text` in an OSC 52 "set clipboard" escape sequence
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
#[path = "osc52_tests.rs"]
mod osc52_tests;
