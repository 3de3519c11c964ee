//! Messages into and out of the command line
//!
//! Inbound calls arrive as a function name plus a JSON argument array and
//! are parsed into a [`FrameCommand`]. Outbound traffic goes to two peers:
//! the background, which executes submitted commands, and the content
//! surface, which shows, hides and focuses the command line.

mod inbound;
mod outbound;

pub use inbound::{Call, FrameCommand, Reply};
pub use outbound::{BackgroundMessage, ContentMessage, Messenger, Outbound};
