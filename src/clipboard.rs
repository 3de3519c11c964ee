//! Clipboard access for the command line
//!
//! Writes go to the system clipboard via arboard, or to the terminal via
//! OSC 52 when no system clipboard is reachable. Reads need the system
//! clipboard.

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard, read_from_clipboard};
