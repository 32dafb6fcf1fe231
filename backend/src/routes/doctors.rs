//! Doctor directory routes. Read-only; the roster is static seed data.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use clinic_common::Doctor;

use crate::error::{ApiError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    active_only: bool,
}

#[derive(Debug, Serialize)]
pub struct DoctorsResponse {
    pub doctors: Vec<Doctor>,
    pub total: usize,
}

/// GET /doctors
async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<DoctorsResponse> {
    let doctors = state.store.list_doctors(query.active_only).await;
    let total = doctors.len();
    Json(DoctorsResponse { doctors, total })
}

/// GET /doctors/:id
async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Doctor>> {
    state
        .store
        .get_doctor(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Doctor"))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/doctors", get(list))
        .route("/doctors/:id", get(get_one))
        .with_state(state)
}
