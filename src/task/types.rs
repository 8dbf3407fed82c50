//! Task domain types
//!
//! A [`Task`] is a description, a done/not-done status, and a closed
//! [`TaskKind`] fixed at creation. Timed kinds own their parsed timestamp;
//! construction fails before a task exists if the timestamp text does not
//! parse. [`TaskVariant`] is the data-less discriminant used by the command
//! registry to name and build each kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::{TimeParseError, Timestamp};

/// Done/not-done flag, toggled only through explicit mark/unmark commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotDone,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 2] = [TaskStatus::Done, TaskStatus::NotDone];

    /// The status cell of a task rendering.
    pub fn icon(self) -> char {
        match self {
            TaskStatus::Done => 'X',
            TaskStatus::NotDone => ' ',
        }
    }

    /// The console command that moves a task into this status.
    pub fn command_name(self) -> &'static str {
        match self {
            TaskStatus::Done => "mark",
            TaskStatus::NotDone => "unmark",
        }
    }

    /// Human wording for result messages.
    pub fn describe(self) -> &'static str {
        match self {
            TaskStatus::Done => "done",
            TaskStatus::NotDone => "not done",
        }
    }
}

/// Data-less discriminant over the task kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskVariant {
    Plain,
    Deadline,
    Interval,
}

impl TaskVariant {
    pub const ALL: [TaskVariant; 3] = [
        TaskVariant::Plain,
        TaskVariant::Deadline,
        TaskVariant::Interval,
    ];

    /// The console command that adds a task of this kind.
    pub fn command_name(self) -> &'static str {
        match self {
            TaskVariant::Plain => "todo",
            TaskVariant::Deadline => "deadline",
            TaskVariant::Interval => "event",
        }
    }

    /// The kind cell of a task rendering.
    pub fn icon(self) -> char {
        match self {
            TaskVariant::Plain => 'T',
            TaskVariant::Deadline => 'D',
            TaskVariant::Interval => 'E',
        }
    }

    /// Marker tag that carries this kind's timestamp text, also used as
    /// the label in the rendering suffix. `None` for the untimed kind.
    pub fn time_marker(self) -> Option<&'static str> {
        match self {
            TaskVariant::Plain => None,
            TaskVariant::Deadline => Some("by"),
            TaskVariant::Interval => Some("at"),
        }
    }
}

/// The kind of a task together with its kind-specific data.
///
/// The interval kind deliberately stores only a start timestamp; there is
/// no separately modeled end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    Plain,
    Deadline { due: Timestamp },
    Interval { start: Timestamp },
}

impl TaskKind {
    pub fn variant(&self) -> TaskVariant {
        match self {
            TaskKind::Plain => TaskVariant::Plain,
            TaskKind::Deadline { .. } => TaskVariant::Deadline,
            TaskKind::Interval { .. } => TaskVariant::Interval,
        }
    }
}

/// One entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    status: TaskStatus,
    kind: TaskKind,
}

impl Task {
    /// Build a task of the given variant. Timed variants parse their
    /// timestamp text here; a parse failure means no task is created.
    /// Empty descriptions are legal.
    pub fn new(
        variant: TaskVariant,
        description: impl Into<String>,
        time_text: Option<&str>,
    ) -> Result<Self, TimeParseError> {
        let kind = match variant {
            TaskVariant::Plain => TaskKind::Plain,
            TaskVariant::Deadline => TaskKind::Deadline {
                due: Timestamp::parse(time_text.unwrap_or(""))?,
            },
            TaskVariant::Interval => TaskKind::Interval {
                start: Timestamp::parse(time_text.unwrap_or(""))?,
            },
        };
        Ok(Self {
            description: description.into(),
            status: TaskStatus::NotDone,
            kind,
        })
    }

    /// Build an untimed task; cannot fail.
    pub fn plain(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: TaskStatus::NotDone,
            kind: TaskKind::Plain,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.variant().icon(),
            self.status.icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Plain => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {due})"),
            TaskKind::Interval { start } => write!(f, " (at: {start})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_task_rendering() {
        let task = Task::plain("buy milk");
        assert_eq!(task.to_string(), "[T][ ] buy milk");
        assert!(!task.is_done());
    }

    #[test]
    fn timed_task_rendering_carries_suffix() {
        let task =
            Task::new(TaskVariant::Deadline, "return book", Some("2024-06-01 18:30")).unwrap();
        assert_eq!(task.to_string(), "[D][ ] return book (by: Jun 1 2024, 18:30)");

        let task = Task::new(TaskVariant::Interval, "party", Some("2024-01-01 19:00")).unwrap();
        assert_eq!(task.to_string(), "[E][ ] party (at: Jan 1 2024, 19:00)");
    }

    #[test]
    fn status_changes_the_icon() {
        let mut task = Task::plain("x");
        task.set_status(TaskStatus::Done);
        assert_eq!(task.to_string(), "[T][X] x");
        task.set_status(TaskStatus::NotDone);
        assert_eq!(task.to_string(), "[T][ ] x");
    }

    #[test]
    fn bad_timestamp_aborts_construction() {
        assert!(Task::new(TaskVariant::Deadline, "read", Some("whenever")).is_err());
        assert!(Task::new(TaskVariant::Interval, "read", None).is_err());
    }

    #[test]
    fn empty_description_is_legal() {
        let task = Task::plain("");
        assert_eq!(task.to_string(), "[T][ ] ");
    }

    #[test]
    fn variant_names_match_commands() {
        assert_eq!(TaskVariant::Plain.command_name(), "todo");
        assert_eq!(TaskVariant::Deadline.command_name(), "deadline");
        assert_eq!(TaskVariant::Interval.command_name(), "event");
        assert_eq!(TaskStatus::Done.command_name(), "mark");
        assert_eq!(TaskStatus::NotDone.command_name(), "unmark");
    }
}
