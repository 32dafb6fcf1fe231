//! Dashboard stats.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::store::DashboardStats;
use crate::AppState;

/// GET /dashboard/stats
async fn stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    let today = Utc::now().date_naive();
    Json(state.store.stats(today).await)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/dashboard/stats", get(stats)).with_state(state)
}
