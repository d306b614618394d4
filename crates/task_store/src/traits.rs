//! Task store trait definitions.

use async_trait::async_trait;
use entities::{NewTask, NewUser, Task, TaskId, TaskPatch, User, UserId};

use crate::TaskStoreResult;

/// Trait for task and user storage operations.
///
/// Absence is never an error: lookups return `Ok(None)` and removals return
/// `Ok(false)`.
#[async_trait]
pub trait TaskStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> TaskStoreResult<Option<User>>;

    /// Gets the first user with exactly this username.
    async fn get_user_by_username(&self, username: &str) -> TaskStoreResult<Option<User>>;

    /// Creates a new user under the next user ID.
    async fn create_user(&self, user: NewUser) -> TaskStoreResult<User>;

    // =========================================================================
    // Task operations
    // =========================================================================

    /// Lists all tasks.
    async fn get_all_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Gets a task by ID.
    async fn get_task_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Creates a new task under the next task ID.
    async fn create_task(&self, task: NewTask) -> TaskStoreResult<Task>;

    /// Applies a patch to a task. Returns `None` if the task does not exist.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>>;

    /// Deletes a task. Returns whether anything was removed.
    async fn delete_task(&self, id: TaskId) -> TaskStoreResult<bool>;

    /// Deletes every completed task. Returns whether anything was removed.
    async fn clear_completed_tasks(&self) -> TaskStoreResult<bool>;
}
