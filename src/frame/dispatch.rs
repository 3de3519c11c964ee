use serde_json::Value;

use super::CommandFrame;
use crate::editor::EditorFunction;
use crate::error::Result;
use crate::messaging::{FrameCommand, Reply};

impl CommandFrame {
    /// Invoke a command-line function by name with JSON arguments
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Reply> {
        let command = FrameCommand::from_call(name, args)?;
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: FrameCommand) -> Result<Reply> {
        log::trace!("Dispatching {:?}", command);

        match command {
            FrameCommand::Focus => self.focus(),
            FrameCommand::NextCompletion => self.next_completion(),
            FrameCommand::PrevCompletions => self.prev_completions(),
            FrameCommand::InsertCompletion => self.insert_completion(),
            FrameCommand::InsertCompletionOrSpace => self.insert_completion_or_space(),
            FrameCommand::History(n) => self.history_step(n),
            FrameCommand::Process => self.process()?,
            FrameCommand::FillCmdline {
                text,
                trailing_space,
                take_focus,
            } => self.fillcmdline(&text, trailing_space, take_focus),
            FrameCommand::GetContent => return Ok(Reply::Text(self.get_content())),
            FrameCommand::EditorFunction(name) => self.editor_function(&name),
            FrameCommand::SetClipboard(text) => self.set_clipboard(&text)?,
            FrameCommand::GetClipboard => return Ok(Reply::Text(self.get_clipboard()?)),
            FrameCommand::Clear { detach_blur_guard } => self.clear(detach_blur_guard),
            FrameCommand::HideAndClear => self.hide_and_clear(),
        }

        Ok(Reply::None)
    }

    /// Apply a named editor function to the input
    ///
    /// Unknown names are logged; the command line has no place to show them.
    pub fn editor_function(&mut self, name: &str) {
        match name.parse::<EditorFunction>() {
            Ok(function) => {
                function.apply(&mut self.input);
            }
            Err(e) => log::error!("{}", e),
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
