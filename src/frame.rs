//! The command-line controller
//!
//! [`CommandFrame`] owns everything a command-line session needs: the
//! input line, the completion sources and their scheduler, the history
//! cursor and the outbound messenger. Callers drive it with
//! [`FrameCommand`](crate::messaging::FrameCommand)s, by name through
//! [`CommandFrame::call`], or with raw key events.

mod dispatch;
mod frame_events;
pub mod frame_render;
mod frame_state;

pub use frame_state::{CommandFrame, FrameOptions, FrameView};
