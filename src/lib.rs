//! # taskline
//!
//! A line-oriented task manager. The user types short commands into a
//! console loop; taskline tokenizes the line, dispatches it to a command,
//! validates the parameters, executes against an in-memory task list, and
//! reports a success-or-error outcome.
//!
//! ## Architecture Overview
//!
//! - **[`parser`]**: tokenizes a raw line into a command name plus
//!   `(marker, argument)` pairs
//! - **[`task`]**: the task variants (plain, deadline, interval) and the
//!   bounded, index-addressed task list
//! - **[`command`]**: the command lifecycle (accumulate -> validate ->
//!   execute -> outcome), the error taxonomy, and the dispatch registry
//! - **[`ui`]**: the console read-eval loop that renders outcomes
//!
//! ## Quick Start
//!
//! ```
//! use taskline::{CommandRegistry, TaskList};
//!
//! let registry = CommandRegistry::standard();
//! let mut tasks = TaskList::new();
//!
//! let command = registry.fetch("todo read a book").unwrap();
//! let command = CommandRegistry::execute(command, &mut tasks);
//! let outcome = CommandRegistry::outcome_of(command.as_ref());
//!
//! assert!(outcome.is_success());
//! assert_eq!(tasks.len(), 1);
//! ```

/// Input line tokenization.
pub mod parser;

/// Task variants and the bounded task list.
pub mod task;

/// Command lifecycle, error taxonomy, and dispatch registry.
pub mod command;

/// Console front end.
pub mod ui;

pub use command::{Command, CommandError, CommandKind, CommandRegistry, Outcome};
pub use parser::Parser;
pub use task::{
    DEFAULT_CAPACITY, Task, TaskKind, TaskList, TaskStatus, TaskVariant, TimeParseError, Timestamp,
};
pub use ui::ConsoleUi;
