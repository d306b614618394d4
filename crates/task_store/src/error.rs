//! Task store error types.

use thiserror::Error;

/// Errors that can occur during task store operations.
///
/// Missing entities are not errors; lookups return `None` and removals
/// return `false`. The in-memory backend never produces any of these.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Backend failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TaskStoreError {
    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;
