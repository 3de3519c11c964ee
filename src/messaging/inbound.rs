use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CmdframeError, Result};

/// A call as it arrives from another process: function name plus arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Operations the command line exposes to its callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameCommand {
    Focus,
    NextCompletion,
    PrevCompletions,
    InsertCompletion,
    InsertCompletionOrSpace,
    History(i64),
    Process,
    FillCmdline {
        text: String,
        trailing_space: bool,
        take_focus: bool,
    },
    GetContent,
    EditorFunction(String),
    SetClipboard(String),
    GetClipboard,
    Clear {
        detach_blur_guard: bool,
    },
    HideAndClear,
}

/// What a command hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    None,
    Text(String),
}

impl FrameCommand {
    /// Parse a call by name; missing optional arguments take their defaults
    pub fn from_call(name: &str, args: &[Value]) -> Result<Self> {
        let args = Args { command: name, args };
        let command = match name {
            "focus" => FrameCommand::Focus,
            "next_completion" => FrameCommand::NextCompletion,
            "prev_completions" => FrameCommand::PrevCompletions,
            "insert_completion" => FrameCommand::InsertCompletion,
            "insert_completion_or_space" => FrameCommand::InsertCompletionOrSpace,
            "history" => FrameCommand::History(args.int(0)?),
            "process" => FrameCommand::Process,
            "fillcmdline" => FrameCommand::FillCmdline {
                text: args.optional_str(0)?.unwrap_or_default(),
                trailing_space: args.optional_bool(1)?.unwrap_or(true),
                take_focus: args.optional_bool(2)?.unwrap_or(true),
            },
            "getContent" => FrameCommand::GetContent,
            "editor_function" => FrameCommand::EditorFunction(args.str(0)?),
            "setClipboard" => FrameCommand::SetClipboard(args.str(0)?),
            "getClipboard" => FrameCommand::GetClipboard,
            "clear" => FrameCommand::Clear {
                detach_blur_guard: args.optional_bool(0)?.unwrap_or(false),
            },
            "hide_and_clear" => FrameCommand::HideAndClear,
            other => return Err(CmdframeError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

impl TryFrom<Call> for FrameCommand {
    type Error = CmdframeError;

    fn try_from(call: Call) -> Result<Self> {
        FrameCommand::from_call(&call.name, &call.args)
    }
}

struct Args<'a> {
    command: &'a str,
    args: &'a [Value],
}

impl Args<'_> {
    fn invalid(&self, reason: String) -> CmdframeError {
        CmdframeError::InvalidArguments {
            command: self.command.to_string(),
            reason,
        }
    }

    /// Argument `i`, with JSON null treated as absent
    fn get(&self, i: usize) -> Option<&Value> {
        self.args.get(i).filter(|v| !v.is_null())
    }

    fn int(&self, i: usize) -> Result<i64> {
        self.get(i)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.invalid(format!("argument {} must be an integer", i)))
    }

    fn str(&self, i: usize) -> Result<String> {
        self.optional_str(i)?
            .ok_or_else(|| self.invalid(format!("argument {} is required", i)))
    }

    fn optional_str(&self, i: usize) -> Result<Option<String>> {
        match self.get(i) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.invalid(format!("argument {} must be a string", i))),
        }
    }

    fn optional_bool(&self, i: usize) -> Result<Option<bool>> {
        match self.get(i) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.invalid(format!("argument {} must be a boolean", i))),
        }
    }
}

#[cfg(test)]
#[path = "inbound_tests.rs"]
mod inbound_tests;
