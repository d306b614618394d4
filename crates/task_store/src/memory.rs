//! In-memory task store implementation.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use entities::{NewTask, NewUser, Task, TaskId, TaskPatch, User, UserId};
use tokio::sync::RwLock;

use crate::{TaskStore, TaskStoreResult};

/// Entities of one type keyed by ID, plus the counter that hands out IDs.
///
/// The counter lives behind the same lock as the map so that assigning an
/// ID and inserting under it happen together.
#[derive(Debug)]
struct Collection<T> {
    next_id: u64,
    items: BTreeMap<u64, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Collection<T> {
    /// Builds an entity under the next ID, stores it and returns a copy.
    fn insert_next(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let item = build(id);
        self.items.insert(id, item.clone());
        item
    }
}

/// Task store that keeps everything in process memory.
///
/// State starts empty with both ID counters at 1 and is lost when the store
/// is dropped. IDs are never reused, even after deletion. Enumeration is in
/// ascending ID order.
#[derive(Debug, Default, Clone)]
pub struct MemoryTaskStore {
    users: Arc<RwLock<Collection<User>>>,
    tasks: Arc<RwLock<Collection<Task>>>,
}

impl MemoryTaskStore {
    /// Creates a new in-memory task store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn get_user(&self, id: UserId) -> TaskStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.items.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> TaskStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .items
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> TaskStoreResult<User> {
        let mut users = self.users.write().await;
        let user = users.insert_next(|id| User::new(id, user));
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    // =========================================================================
    // Task operations
    // =========================================================================

    async fn get_all_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.items.values().cloned().collect())
    }

    async fn get_task_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.items.get(&id).cloned())
    }

    async fn create_task(&self, task: NewTask) -> TaskStoreResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.insert_next(|id| Task::new(id, task));
        tracing::debug!(task_id = task.id, "Task created");
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        let mut tasks = self.tasks.write().await;
        let Some(existing) = tasks.items.get_mut(&id) else {
            return Ok(None);
        };
        *existing = patch.apply(existing);
        tracing::debug!(task_id = id, "Task updated");
        Ok(Some(existing.clone()))
    }

    async fn delete_task(&self, id: TaskId) -> TaskStoreResult<bool> {
        let mut tasks = self.tasks.write().await;
        let removed = tasks.items.remove(&id).is_some();
        if removed {
            tracing::debug!(task_id = id, "Task deleted");
        }
        Ok(removed)
    }

    async fn clear_completed_tasks(&self) -> TaskStoreResult<bool> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.items.len();
        tasks.items.retain(|_, t| !t.completed);
        let removed = before - tasks.items.len();
        tracing::debug!(removed, "Completed tasks cleared");
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_task_crud() {
        let store = MemoryTaskStore::new();

        // Create
        let created = store.create_task(NewTask::new("buy milk")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.text, "buy milk");
        assert!(!created.completed);

        // Get
        let fetched = store.get_task_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        // List
        let tasks = store.get_all_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);

        // Delete
        assert!(store.delete_task(created.id).await.unwrap());
        assert!(store.get_task_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_task_ids_strictly_increase() {
        let store = MemoryTaskStore::new();

        let mut last = 0;
        for i in 0..5 {
            let task = store.create_task(NewTask::new(format!("task {i}"))).await.unwrap();
            assert!(task.id > last);
            last = task.id;
        }
    }

    #[tokio::test]
    async fn test_task_ids_not_reused_after_delete() {
        let store = MemoryTaskStore::new();

        let first = store.create_task(NewTask::new("a")).await.unwrap();
        let second = store.create_task(NewTask::new("b")).await.unwrap();
        store.delete_task(second.id).await.unwrap();
        store.delete_task(first.id).await.unwrap();

        let third = store.create_task(NewTask::new("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_create_task_keeps_completed_flag() {
        let store = MemoryTaskStore::new();

        let task = store
            .create_task(NewTask::new("walk dog").with_completed(true))
            .await
            .unwrap();
        assert!(task.completed);
    }

    #[tokio::test]
    async fn test_update_task_preserves_unpatched_fields() {
        let store = MemoryTaskStore::new();
        let created = store.create_task(NewTask::new("write report")).await.unwrap();

        let updated = store
            .update_task(created.id, TaskPatch::default().with_completed(true))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.text, created.text);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.completed);

        let fetched = store.get_task_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_task_with_empty_patch_is_noop() {
        let store = MemoryTaskStore::new();
        let created = store.create_task(NewTask::new("same")).await.unwrap();

        let updated = store
            .update_task(created.id, TaskPatch::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_missing_task_returns_none() {
        let store = MemoryTaskStore::new();

        let result = store
            .update_task(42, TaskPatch::default().with_text("nope"))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.get_all_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_task_reports_removal_once() {
        let store = MemoryTaskStore::new();
        let task = store.create_task(NewTask::new("once")).await.unwrap();

        assert!(store.delete_task(task.id).await.unwrap());
        assert!(!store.delete_task(task.id).await.unwrap());
        assert!(!store.delete_task(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_completed_on_empty_store() {
        let store = MemoryTaskStore::new();
        assert!(!store.clear_completed_tasks().await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_completed_without_completed_tasks() {
        let store = MemoryTaskStore::new();
        store.create_task(NewTask::new("open")).await.unwrap();

        assert!(!store.clear_completed_tasks().await.unwrap());
        assert_eq!(store.get_all_tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_completed_scenario() {
        let store = MemoryTaskStore::new();

        let a = store.create_task(NewTask::new("buy milk")).await.unwrap();
        let b = store
            .create_task(NewTask::new("walk dog").with_completed(true))
            .await
            .unwrap();
        let c = store.create_task(NewTask::new("write report")).await.unwrap();

        assert_eq!(store.get_all_tasks().await.unwrap().len(), 3);

        assert!(store.clear_completed_tasks().await.unwrap());

        let remaining = store.get_all_tasks().await.unwrap();
        let ids: Vec<TaskId> = remaining.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert!(store.get_task_by_id(b.id).await.unwrap().is_none());

        assert!(!store.clear_completed_tasks().await.unwrap());
    }

    #[tokio::test]
    async fn test_user_crud() {
        let store = MemoryTaskStore::new();

        let created = store
            .create_user(NewUser::new("alice").with_field("password", "secret"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.username, "alice");

        let fetched = store.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let by_name = store.get_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        assert!(store.get_user(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_username_is_exact_match() {
        let store = MemoryTaskStore::new();
        store.create_user(NewUser::new("Alice")).await.unwrap();

        assert!(store.get_user_by_username("alice").await.unwrap().is_none());
        assert!(store.get_user_by_username("Alic").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_usernames_return_oldest() {
        let store = MemoryTaskStore::new();
        let first = store.create_user(NewUser::new("dup")).await.unwrap();
        let second = store.create_user(NewUser::new("dup")).await.unwrap();
        assert_ne!(first.id, second.id);

        let found = store.get_user_by_username("dup").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_user_and_task_counters_are_independent() {
        let store = MemoryTaskStore::new();

        store.create_task(NewTask::new("t1")).await.unwrap();
        store.create_task(NewTask::new("t2")).await.unwrap();
        let user = store.create_user(NewUser::new("u")).await.unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = MemoryTaskStore::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.create_task(NewTask::new(format!("t{i}"))).await.unwrap().id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(store.get_all_tasks().await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_created_at_is_captured_at_creation() {
        let before = chrono::Utc::now();
        let store = MemoryTaskStore::new();
        let task = store.create_task(NewTask::new("timed")).await.unwrap();
        let after = chrono::Utc::now();

        assert!(task.created_at >= before && task.created_at <= after);
    }
}
