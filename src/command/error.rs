//! Command failure taxonomy
//!
//! Every failure a command can produce is captured as data in one of these
//! variants and rendered as a single human-readable line. Nothing here
//! aborts the host loop.

use thiserror::Error;

use crate::task::{ListError, TimeParseError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("'{0}' is not a recognized command")]
    InvalidCommand(String),

    #[error("{command} does not recognize the parameter '/{marker}'")]
    InvalidParameter { command: String, marker: String },

    #[error("{command} requires {expected}")]
    MissingArgument { command: String, expected: String },

    #[error("{command} requires {expected}, got '{found}'")]
    MalformedArgument {
        command: String,
        expected: String,
        found: String,
    },

    #[error("index {index} is out of range for a list of {size} task(s)")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("the task list is full ({capacity} tasks); delete a task before adding another")]
    ListFull { capacity: usize },

    #[error("the task list is empty; nothing to show")]
    EmptyList,

    #[error(transparent)]
    Timestamp(#[from] TimeParseError),

    /// Catch-all for schema violations not covered by the variants above.
    #[error("{0}")]
    Domain(String),
}

impl From<ListError> for CommandError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Full { capacity } => CommandError::ListFull { capacity },
            ListError::Empty => CommandError::EmptyList,
        }
    }
}
