//! User API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use entities::{NewUser, User, UserId};
use serde::Deserialize;
use task_store::TaskStore;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Query parameters for looking a user up by name.
#[derive(Debug, Deserialize)]
pub struct FindUserQuery {
    /// Exact username to match.
    pub username: Option<String>,
}

/// Creates a new user.
pub async fn create_user<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<NewUser>,
) -> ServerResult<(StatusCode, Json<User>)> {
    if request.username.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Username must not be empty".to_string(),
        ));
    }

    let user = state.store.create_user(request).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Gets a user by ID.
pub async fn get_user<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<UserId>,
) -> ServerResult<Json<User>> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("User {id} not found")))?;

    Ok(Json(user))
}

/// Finds a user by username.
pub async fn find_user<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<FindUserQuery>,
) -> ServerResult<Json<User>> {
    let username = query
        .username
        .ok_or_else(|| ServerError::InvalidRequest("Missing username".to_string()))?;

    let user = state
        .store
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
