//! Task-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a task by the store.
pub type TaskId = u64;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned on creation.
    pub id: TaskId,
    /// Task content.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from creation input, stamped with the current time.
    pub fn new(id: TaskId, input: NewTask) -> Self {
        Self {
            id,
            text: input.text,
            completed: input.completed.unwrap_or(false),
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Task content.
    pub text: String,
    /// Initial completion flag. Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl NewTask {
    /// Creates input for an open task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: None,
        }
    }

    /// Sets the initial completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Partial update for a task.
///
/// A `None` field is left untouched; a `Some` field overwrites the stored
/// value, including `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Replacement completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Sets the replacement content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the replacement completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }

    /// Returns `task` with the present fields overwritten.
    ///
    /// `id` and `created_at` always carry over.
    pub fn apply(self, task: &Task) -> Task {
        Task {
            id: task.id,
            text: self.text.unwrap_or_else(|| task.text.clone()),
            completed: self.completed.unwrap_or(task.completed),
            created_at: task.created_at,
        }
    }
}
