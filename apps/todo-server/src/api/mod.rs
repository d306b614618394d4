//! API endpoints.

pub mod task;
pub mod user;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use task_store::TaskStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TaskStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Task endpoints
        .route("/api/tasks", get(task::list_tasks).post(task::create_task))
        .route(
            "/api/tasks/:id",
            get(task::get_task)
                .patch(task::update_task)
                .delete(task::delete_task),
        )
        .route("/api/completed-tasks", delete(task::clear_completed_tasks))
        // User endpoints
        .route("/api/users", get(user::find_user).post(user::create_user))
        .route("/api/users/:id", get(user::get_user))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
