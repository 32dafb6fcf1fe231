//! PIN session gate.
//!
//! Login verifies an identifier/PIN pair against the staff directory and
//! issues an opaque bearer token. The token maps to the identity that
//! satisfied the check at creation time; there is no background revocation,
//! no lockout and no rate limiting. Logout drops the token unconditionally.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use rand::RngCore;
use tokio::sync::RwLock;

use clinic_common::StaffUser;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,
    #[error("Invalid Authorization header format")]
    InvalidFormat,
    #[error("Unknown or expired session token")]
    UnknownToken,
}

/// The identity behind the current request, inserted by [`require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub StaffUser);

/// In-memory map from session token to the identity that logged in.
///
/// Sessions live for the lifetime of the process and are never persisted.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, StaffUser>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session for an identity that already passed the login check.
    /// Returns the bearer token.
    pub async fn create(&self, user: StaffUser) -> String {
        let token = generate_token();
        self.sessions.write().await.insert(token.clone(), user);
        token
    }

    pub async fn get(&self, token: &str) -> Option<StaffUser> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Drop a session. Unknown tokens are ignored, so logout is idempotent.
    pub async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Resolve the identity behind a request's Authorization header.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<StaffUser, AuthError> {
        let token = bearer_token(headers)?;
        self.get(token).await.ok_or(AuthError::UnknownToken)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the bearer token from an Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get("Authorization")
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat)?;

    header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidFormat)
}

/// Find the directory entry matching an identifier/PIN pair.
///
/// First-name match is case-insensitive, the PIN is compared exactly, and
/// deactivated identities never match. The PIN lives in static seed data,
/// so this is plaintext string equality by design of the mock directory.
pub fn verify_login<'a>(
    directory: &'a [StaffUser],
    identifier: &str,
    pin: &str,
) -> Option<&'a StaffUser> {
    directory
        .iter()
        .find(|u| u.first_name.eq_ignore_ascii_case(identifier) && u.pin == pin && u.is_active)
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Middleware that requires a live session and exposes it to handlers as a
/// [`CurrentUser`] extension.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    match state.sessions.authenticate(request.headers()).await {
        Ok(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!("Rejected unauthenticated request: {}", e);
            ApiError::Unauthenticated.into_response()
        }
    }
}
