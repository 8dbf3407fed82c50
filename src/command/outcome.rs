//! Success-or-error result of one command execution

use super::error::CommandError;

/// The outcome attached to an executed command: either an ordered sequence
/// of display lines or a diagnosable error. Exactly one side is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Vec<String>),
    Error(CommandError),
}

impl Outcome {
    /// The canonical "no command was run" outcome: a success with zero
    /// lines. Not an error.
    pub fn empty() -> Self {
        Outcome::Success(Vec::new())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Borrow the success lines, surfacing the error instead of a default
    /// when this outcome is in the error state.
    pub fn lines(&self) -> Result<&[String], &CommandError> {
        match self {
            Outcome::Success(lines) => Ok(lines),
            Outcome::Error(err) => Err(err),
        }
    }

    /// Consume the outcome into its success lines or its error.
    pub fn into_lines(self) -> Result<Vec<String>, CommandError> {
        match self {
            Outcome::Success(lines) => Ok(lines),
            Outcome::Error(err) => Err(err),
        }
    }
}

impl From<CommandError> for Outcome {
    fn from(err: CommandError) -> Self {
        Outcome::Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_a_zero_line_success() {
        let outcome = Outcome::empty();
        assert!(outcome.is_success());
        assert_eq!(outcome.lines().unwrap(), &[] as &[String]);
    }

    #[test]
    fn error_state_surfaces_the_error() {
        let outcome = Outcome::from(CommandError::EmptyList);
        assert!(outcome.is_error());
        assert!(outcome.lines().is_err());
        assert_eq!(outcome.into_lines(), Err(CommandError::EmptyList));
    }
}
