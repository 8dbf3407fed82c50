//! Command registry and dispatch
//!
//! An explicit registry value, built once at startup and handed to the
//! console loop; no process-wide mutable map. It owns the tokenizer and
//! drives the fetch -> execute -> outcome pipeline, tolerating the
//! "nothing was typed" case as `None` end to end.

use std::collections::HashMap;
use tracing::debug;

use crate::parser::{Parser, split_name};
use crate::task::{TaskList, TaskStatus, TaskVariant};

use super::error::CommandError;
use super::outcome::Outcome;
use super::types::{Command, CommandKind, DEFAULT_MARKER};

pub struct CommandRegistry {
    commands: HashMap<String, CommandKind>,
    parser: Parser,
}

impl CommandRegistry {
    /// An empty registry; use [`CommandRegistry::standard`] for the full
    /// command set.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            parser: Parser::new(),
        }
    }

    /// The standard command set: echo, bye, list, one command per mark
    /// status, one per task variant, delete, and find.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("echo", CommandKind::Echo);
        registry.register("bye", CommandKind::Exit);
        registry.register("list", CommandKind::List);
        for status in TaskStatus::ALL {
            registry.register(status.command_name(), CommandKind::SetStatus(status));
        }
        for variant in TaskVariant::ALL {
            registry.register(variant.command_name(), CommandKind::Add(variant));
        }
        registry.register("delete", CommandKind::Delete);
        registry.register("find", CommandKind::Find);
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, kind: CommandKind) {
        let name = name.into();
        debug!(%name, "command registered");
        self.commands.insert(name, kind);
    }

    /// Tokenize a line and build the matching command, fully
    /// parameterized. Blank input is `Ok(None)` (a no-op, not an error);
    /// an unknown command name reports the offending token.
    pub fn fetch(&self, line: &str) -> Result<Option<Command>, CommandError> {
        let mut pairs = self.parser.parse(line).into_iter();
        let (_, head) = pairs.next().unwrap_or_default();
        let (name, default_argument) = split_name(&head);
        if name.is_empty() {
            return Ok(None);
        }
        let Some(kind) = self.commands.get(name) else {
            return Err(CommandError::InvalidCommand(name.to_string()));
        };
        let mut command = Command::new(*kind);
        command.add_parameter(DEFAULT_MARKER, default_argument);
        for (marker, argument) in pairs {
            command.add_parameter(marker, argument);
        }
        debug!(command = name, "command fetched");
        Ok(Some(command))
    }

    /// Execute a fetched command against the task list. `None` in,
    /// `None` out.
    pub fn execute(command: Option<Command>, tasks: &mut TaskList) -> Option<Command> {
        let mut command = command?;
        command.execute(tasks);
        Some(command)
    }

    /// The outcome of a dispatched command; the canonical empty success
    /// when no command ran.
    pub fn outcome_of(command: Option<&Command>) -> Outcome {
        match command.and_then(Command::outcome) {
            Some(outcome) => outcome.clone(),
            None => Outcome::empty(),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
