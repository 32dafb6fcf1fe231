//! Login gate routes.
//!
//! `POST /auth/login` and `POST /auth/logout` are public; `GET /auth/me`
//! sits in the gated tree and reports the session identity.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};

use clinic_common::StaffUser;

use crate::auth::CurrentUser;
use crate::error::{ApiError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// First name of the directory identity, matched case-insensitively.
    pub username: String,
    pub pin: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: StaffUser,
}

/// POST /auth/login - Verify an identifier/PIN pair and open a session.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let Some(user) = state.store.verify_login(&req.username, &req.pin).await else {
        tracing::info!(username = %req.username, "Login attempt rejected");
        return Err(ApiError::InvalidCredentials);
    };

    let token = state.sessions.create(user.clone()).await;
    tracing::info!(user_id = %user.id, role = %user.role, "Session opened");
    Ok(Json(LoginResponse { token, user }))
}

/// POST /auth/logout - Clear the session for the presented token.
///
/// Always succeeds: a missing or unknown token means there is nothing to
/// clear, which is the requested end state.
async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        state.sessions.remove(token).await;
    }
    StatusCode::NO_CONTENT
}

/// GET /auth/me - The identity behind the current session.
async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<StaffUser> {
    Json(user)
}

/// Public login/logout routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .with_state(state)
}

/// Session-gated routes.
pub fn session_router(state: Arc<AppState>) -> Router {
    Router::new().route("/auth/me", get(me)).with_state(state)
}
