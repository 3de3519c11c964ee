use ratatui::crossterm::event::KeyEvent;

use super::CommandFrame;
use crate::error::Result;
use crate::messaging::FrameCommand;

impl CommandFrame {
    /// Handle a key pressed in the command line
    ///
    /// Bound keys run their command; any other key edits the text. Edits
    /// schedule a completion pass; history recall does not.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(command) = self.keymap.lookup(&key).cloned() else {
            if self.input.handle_key(key) {
                self.on_input_changed();
            }
            return Ok(());
        };

        let edits = matches!(
            command,
            FrameCommand::EditorFunction(_)
                | FrameCommand::InsertCompletion
                | FrameCommand::InsertCompletionOrSpace
        );
        let before = self.input.text().to_string();

        self.dispatch(command)?;

        if edits && self.is_visible() && self.input.text() != before {
            self.on_input_changed();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "frame_events_tests.rs"]
mod frame_events_tests;
