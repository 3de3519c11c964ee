use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{CmdframeError, Result};

/// Notifications for the surface hosting the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    Show,
    Hide,
    Focus,
    Blur,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundMessage {
    /// A submitted command line
    RecvExStr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Background(BackgroundMessage),
    Content(ContentMessage),
}

/// Sending half of the outbound channel
#[derive(Debug, Clone)]
pub struct Messenger {
    tx: UnboundedSender<Outbound>,
}

impl Messenger {
    pub fn channel() -> (Self, UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send_background(&self, message: BackgroundMessage) -> Result<()> {
        self.tx
            .send(Outbound::Background(message))
            .map_err(|_| CmdframeError::ChannelClosed("background"))
    }

    /// Content notifications are fire-and-forget
    pub fn send_content(&self, message: ContentMessage) {
        if self.tx.send(Outbound::Content(message)).is_err() {
            log::debug!("Dropped {:?}: content channel closed", message);
        }
    }
}
