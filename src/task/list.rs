//! The bounded, ordered task list
//!
//! Insertion order is preserved and tasks are addressed by their 0-based
//! position. Index-addressed operations report out-of-range through
//! `Option`/`bool` results rather than panicking; only the capacity bound
//! and the empty-list listing are surfaced as errors.

use thiserror::Error;
use tracing::debug;

use super::types::{Task, TaskStatus};

/// Default maximum number of tasks a list may hold.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("the task list is full ({capacity} tasks)")]
    Full { capacity: usize },
    #[error("the task list is empty")]
    Empty,
}

/// Ordered, bounded collection of tasks.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    capacity: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task, failing explicitly once the capacity is reached.
    pub fn add(&mut self, task: Task) -> Result<(), ListError> {
        if self.tasks.len() >= self.capacity {
            return Err(ListError::Full {
                capacity: self.capacity,
            });
        }
        self.tasks.push(task);
        debug!(size = self.tasks.len(), "task added");
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Remove and return the task at `index`; `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            let task = self.tasks.remove(index);
            debug!(index, size = self.tasks.len(), "task removed");
            Some(task)
        } else {
            None
        }
    }

    /// Set the status of the task at `index` and return the updated task;
    /// `None` when out of range.
    pub fn set_status(&mut self, index: usize, status: TaskStatus) -> Option<&Task> {
        let task = self.tasks.get_mut(index)?;
        task.set_status(status);
        Some(&*task)
    }

    /// Renderings of every task, prefixed with their 1-based position.
    /// Fails with [`ListError::Empty`] on a zero-size list so the caller
    /// can tell "nothing to show" apart from a zero-result query.
    pub fn render_lines(&self) -> Result<Vec<String>, ListError> {
        if self.tasks.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {task}", i + 1))
            .collect())
    }

    /// Tasks whose description contains `query` as a case-sensitive
    /// substring, in list order.
    pub fn search(&self, query: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.description().contains(query))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
