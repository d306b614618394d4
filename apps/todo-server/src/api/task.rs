//! Task API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::{NewTask, Task, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};
use task_store::TaskStore;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Response for clearing completed tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCompletedResponse {
    /// Whether any task was removed.
    pub cleared: bool,
}

fn task_not_found(id: TaskId) -> ServerError {
    ServerError::NotFound(format!("Task {id} not found"))
}

fn validate_text(text: &str) -> ServerResult<()> {
    if text.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Task text must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Lists all tasks.
pub async fn list_tasks<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Task>>> {
    let tasks = state.store.get_all_tasks().await?;
    Ok(Json(tasks))
}

/// Gets a task by ID.
pub async fn get_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<TaskId>,
) -> ServerResult<Json<Task>> {
    let task = state
        .store
        .get_task_by_id(id)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    Ok(Json(task))
}

/// Creates a new task.
pub async fn create_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<NewTask>,
) -> ServerResult<(StatusCode, Json<Task>)> {
    validate_text(&request.text)?;

    let task = state.store.create_task(request).await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Applies a partial update to a task.
pub async fn update_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<TaskId>,
    Json(patch): Json<TaskPatch>,
) -> ServerResult<Json<Task>> {
    if let Some(text) = &patch.text {
        validate_text(text)?;
    }

    let task = state
        .store
        .update_task(id, patch)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    tracing::info!(task_id = id, completed = task.completed, "Task updated");

    Ok(Json(task))
}

/// Deletes a task.
pub async fn delete_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<TaskId>,
) -> ServerResult<StatusCode> {
    if !state.store.delete_task(id).await? {
        return Err(task_not_found(id));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes every completed task.
pub async fn clear_completed_tasks<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ClearCompletedResponse>> {
    let cleared = state.store.clear_completed_tasks().await?;

    tracing::info!(cleared, "Completed tasks cleared");

    Ok(Json(ClearCompletedResponse { cleared }))
}
