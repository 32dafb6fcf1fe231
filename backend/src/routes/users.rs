//! Staff directory administration. Admin role required.
//!
//! This is independent CRUD over the same directory the login gate reads:
//! deactivating an identity stops future logins but does not revoke
//! sessions that already exist.

use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Serialize;

use clinic_common::StaffUser;

use crate::auth::CurrentUser;
use crate::error::{ApiError, Result};
use crate::store::StaffUserInput;
use crate::AppState;

/// Middleware that requires the session identity to carry the admin role.
/// Runs inside the session gate, so the extension is always present.
async fn require_admin(request: Request, next: Next) -> Response {
    match request.extensions().get::<CurrentUser>() {
        Some(CurrentUser(user)) if user.role.is_admin() => next.run(request).await,
        Some(_) => ApiError::Forbidden.into_response(),
        None => ApiError::Unauthenticated.into_response(),
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<StaffUser>,
    pub total: usize,
}

/// GET /users
async fn list(State(state): State<Arc<AppState>>) -> Json<UsersResponse> {
    let users = state.store.list_users().await;
    let total = users.len();
    Json(UsersResponse { users, total })
}

/// POST /users - Create an identity, active by default.
async fn create(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(admin)): Extension<CurrentUser>,
    Json(input): Json<StaffUserInput>,
) -> (StatusCode, Json<StaffUser>) {
    let user = state.store.create_user(input).await;
    tracing::info!(user_id = %user.id, created_by = %admin.id, "Directory identity created");
    (StatusCode::CREATED, Json(user))
}

/// PUT /users/:id
async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<StaffUserInput>,
) -> Result<Json<StaffUser>> {
    state
        .store
        .update_user(&id, input)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

/// DELETE /users/:id
async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode> {
    if state.store.delete_user(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("User"))
    }
}

/// POST /users/:id/toggle-active
async fn toggle_active(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StaffUser>> {
    state
        .store
        .toggle_user_active(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

/// Build the user administration router, nested under `/users`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", axum::routing::put(update).delete(delete))
        .route("/:id/toggle-active", post(toggle_active))
        .layer(middleware::from_fn(require_admin))
        .with_state(state)
}
