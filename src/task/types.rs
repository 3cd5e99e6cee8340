use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{format_display_datetime, TaskKind};

/// Scheduling payload distinguishing the three task kinds.
///
/// An event carries both instants or it is not an event; there is no way to
/// construct one with only a start or only an end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskDetail {
    Todo,
    Deadline { due: NaiveDateTime },
    Event { start: NaiveDateTime, end: NaiveDateTime },
}

/// A single tracked task.
///
/// The completion flag is the only mutable state; everything else is fixed at
/// construction. `Display` renders the line that is both shown to the user
/// and written to the task file, e.g. `[ ][D]submit (by: 2 Dec 2023 06:00 PM)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    #[serde(flatten)]
    detail: TaskDetail,
    done: bool,
}

impl Task {
    /// A plain todo.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            detail: TaskDetail::Todo,
            done: false,
        }
    }

    /// A task due at one instant.
    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            detail: TaskDetail::Deadline { due },
            done: false,
        }
    }

    /// A task spanning a time range.
    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            detail: TaskDetail::Event { start, end },
            done: false,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn detail(&self) -> &TaskDetail {
        &self.detail
    }

    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        match self.detail {
            TaskDetail::Todo => TaskKind::Todo,
            TaskDetail::Deadline { .. } => TaskKind::Deadline,
            TaskDetail::Event { .. } => TaskKind::Event,
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}]{}", status, self.kind().code(), self.description)?;
        match &self.detail {
            TaskDetail::Todo => Ok(()),
            TaskDetail::Deadline { due } => {
                write!(f, " (by: {})", format_display_datetime(*due))
            }
            TaskDetail::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_display_datetime(*start),
                format_display_datetime(*end)
            ),
        }
    }
}
