//! Role-scoped navigation for the current session.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;

use clinic_common::{entries_for, NavEntry, Role};

use crate::auth::CurrentUser;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NavResponse {
    pub role: Role,
    pub entries: &'static [NavEntry],
}

/// GET /nav - Navigation entries visible to the session's role.
async fn nav(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<NavResponse> {
    Json(NavResponse {
        role: user.role,
        entries: entries_for(user.role),
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/nav", get(nav)).with_state(state)
}
