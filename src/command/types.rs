//! The command lifecycle
//!
//! One [`Command`] value exists per invocation. The registry constructs it,
//! parameters are accumulated one pair at a time, then validation and
//! execution each set the outcome at most once:
//!
//! `Created -> (parameter accumulation)* -> Validated{ok|error} ->
//! Executed{success|error}`
//!
//! Success and error are terminal. Validation is pure with respect to the
//! task list and may run repeatedly; execution short-circuits once a
//! terminal outcome is attached, so re-entering an executed command never
//! re-applies its effect.

use std::collections::HashMap;
use tracing::debug;

use crate::task::{Task, TaskList, TaskStatus, TaskVariant};

use super::error::CommandError;
use super::outcome::Outcome;

/// Marker key under which the default (positional) argument is stored.
pub const DEFAULT_MARKER: &str = "";

/// Closed set of command behaviors, one variant per registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Echo the default argument back verbatim.
    Echo,
    /// Signal the host loop to terminate.
    Exit,
    /// Render every task with its 1-based position.
    List,
    /// Move the addressed task into the carried status.
    SetStatus(TaskStatus),
    /// Append a new task of the carried variant.
    Add(TaskVariant),
    /// Remove the addressed task.
    Delete,
    /// Render every task whose description contains the query.
    Find,
}

impl CommandKind {
    /// The name this kind is registered under.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Echo => "echo",
            CommandKind::Exit => "bye",
            CommandKind::List => "list",
            CommandKind::SetStatus(status) => status.command_name(),
            CommandKind::Add(variant) => variant.command_name(),
            CommandKind::Delete => "delete",
            CommandKind::Find => "find",
        }
    }

    /// Whether this kind's schema knows the given marker.
    fn recognizes(self, marker: &str) -> bool {
        match self {
            CommandKind::Add(variant) => variant.time_marker() == Some(marker),
            _ => false,
        }
    }
}

/// A single command invocation with its accumulated parameters and, once
/// validated or executed, its outcome.
#[derive(Debug, Clone)]
pub struct Command {
    kind: CommandKind,
    params: HashMap<String, String>,
    outcome: Option<Outcome>,
}

impl Command {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            params: HashMap::new(),
            outcome: None,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Append one `(marker, argument)` pair. The empty marker is the
    /// default argument. Re-adding a marker keeps the last value.
    pub fn add_parameter(&mut self, marker: impl Into<String>, argument: impl Into<String>) {
        let marker = marker.into();
        if self.params.insert(marker.clone(), argument.into()).is_some() {
            debug!(command = self.kind.name(), %marker, "duplicate marker, last value kept");
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_successful(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Success(_)))
    }

    pub fn is_erroneous(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Error(_)))
    }

    /// True when the host loop should stop after rendering this command.
    pub fn requests_exit(&self) -> bool {
        self.kind == CommandKind::Exit && self.is_successful()
    }

    /// Check the accumulated parameters against this command's schema.
    /// Pure with respect to the task list; attaches an error outcome on
    /// the first violation and returns whether the command is still
    /// viable. Idempotent: an already-erroneous command stays erroneous.
    pub fn validate(&mut self) -> bool {
        if self.is_erroneous() {
            return false;
        }
        if let Err(err) = self.check_parameters() {
            self.outcome = Some(Outcome::Error(err));
            return false;
        }
        true
    }

    /// Validate then run the effect against the task list, attaching the
    /// outcome. Re-entering after success returns without re-applying the
    /// effect; once erroneous, the same error is kept.
    pub fn execute(&mut self, tasks: &mut TaskList) {
        if self.is_successful() {
            return;
        }
        if !self.validate() {
            return;
        }
        self.outcome = Some(match self.run(tasks) {
            Ok(lines) => Outcome::Success(lines),
            Err(err) => Outcome::Error(err),
        });
    }

    fn default_argument(&self) -> &str {
        self.params
            .get(DEFAULT_MARKER)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn marker_argument(&self, marker: &str) -> Option<&str> {
        self.params.get(marker).map(String::as_str)
    }

    fn check_parameters(&self) -> Result<(), CommandError> {
        let name = self.kind.name();
        for marker in self.params.keys() {
            if marker != DEFAULT_MARKER && !self.kind.recognizes(marker) {
                return Err(CommandError::InvalidParameter {
                    command: name.to_string(),
                    marker: marker.clone(),
                });
            }
        }

        match self.kind {
            // Echo accepts anything; an add's default argument is the
            // description, and empty descriptions are legal.
            CommandKind::Echo | CommandKind::Add(_) => {}
            CommandKind::Exit | CommandKind::List => {
                if !self.default_argument().trim().is_empty() {
                    return Err(CommandError::Domain(format!(
                        "{name} does not take an argument"
                    )));
                }
            }
            CommandKind::SetStatus(_) | CommandKind::Delete => {
                self.user_index()?;
            }
            CommandKind::Find => {
                if self.default_argument().is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: name.to_string(),
                        expected: "a search query".to_string(),
                    });
                }
            }
        }

        if let CommandKind::Add(variant) = self.kind
            && let Some(marker) = variant.time_marker()
            && self
                .marker_argument(marker)
                .is_none_or(|arg| arg.trim().is_empty())
        {
            return Err(CommandError::MissingArgument {
                command: name.to_string(),
                expected: format!("a '/{marker}' date/time"),
            });
        }

        Ok(())
    }

    /// The 1-based index the user supplied as the default argument.
    fn user_index(&self) -> Result<usize, CommandError> {
        let name = self.kind.name();
        let raw = self.default_argument().trim();
        if raw.is_empty() {
            return Err(CommandError::MissingArgument {
                command: name.to_string(),
                expected: "a task number".to_string(),
            });
        }
        match raw.parse::<usize>() {
            Ok(index) if index >= 1 => Ok(index),
            _ => Err(CommandError::MalformedArgument {
                command: name.to_string(),
                expected: "a task number".to_string(),
                found: raw.to_string(),
            }),
        }
    }

    fn run(&self, tasks: &mut TaskList) -> Result<Vec<String>, CommandError> {
        match self.kind {
            CommandKind::Echo => Ok(vec![self.default_argument().to_string()]),
            CommandKind::Exit => Ok(vec!["Goodbye.".to_string()]),
            CommandKind::List => Ok(tasks.render_lines()?),
            CommandKind::SetStatus(status) => self.run_set_status(status, tasks),
            CommandKind::Add(variant) => self.run_add(variant, tasks),
            CommandKind::Delete => self.run_delete(tasks),
            CommandKind::Find => Ok(tasks
                .search(self.default_argument())
                .into_iter()
                .map(|task| task.to_string())
                .collect()),
        }
    }

    fn run_set_status(
        &self,
        status: TaskStatus,
        tasks: &mut TaskList,
    ) -> Result<Vec<String>, CommandError> {
        let index = self.user_index()?;
        let size = tasks.len();
        let task = tasks
            .set_status(index - 1, status)
            .ok_or(CommandError::IndexOutOfRange { index, size })?;
        Ok(vec![format!("Marked as {}: {task}", status.describe())])
    }

    fn run_add(
        &self,
        variant: TaskVariant,
        tasks: &mut TaskList,
    ) -> Result<Vec<String>, CommandError> {
        let time_text = variant
            .time_marker()
            .and_then(|marker| self.marker_argument(marker));
        let task = Task::new(variant, self.default_argument(), time_text)?;
        let rendering = task.to_string();
        tasks.add(task)?;
        Ok(vec![
            format!("Task added: {rendering}"),
            format!("{} task(s) in the list.", tasks.len()),
        ])
    }

    fn run_delete(&self, tasks: &mut TaskList) -> Result<Vec<String>, CommandError> {
        let index = self.user_index()?;
        let size = tasks.len();
        let task = tasks
            .remove(index - 1)
            .ok_or(CommandError::IndexOutOfRange { index, size })?;
        Ok(vec![
            format!("Removed: {task}"),
            format!("{} task(s) remain.", tasks.len()),
        ])
    }
}
