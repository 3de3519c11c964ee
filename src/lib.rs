//! A command line with debounced completions and prefix history recall
//!
//! [`frame::CommandFrame`] is the entry point: it takes key events or named
//! calls, keeps completion sources up to date while the user types, and
//! sends submitted commands to the background over a [`messaging::Messenger`].

pub mod clipboard;
pub mod completion;
pub mod config;
pub mod editor;
pub mod error;
pub mod frame;
pub mod history;
pub mod input;
pub mod keymap;
pub mod messaging;
pub mod widgets;
