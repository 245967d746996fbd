//! Structured command output for `--format json`.

use serde::Serialize;

/// Envelope around one command's result: the human message plus the payload
/// the command produced. Emitted pretty-printed so piped output stays
/// readable.
#[derive(Debug, Serialize)]
pub struct CommandResult<T: Serialize> {
    message: String,
    data: T,
}

impl<T: Serialize> CommandResult<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
