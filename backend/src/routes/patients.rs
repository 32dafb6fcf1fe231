//! Patient record routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use clinic_common::Patient;

use crate::error::{ApiError, Result};
use crate::store::PatientInput;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<Patient>,
    pub total: usize,
}

/// GET /patients - List patients, optionally filtered by name.
async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<PatientsResponse> {
    let patients = state.store.list_patients(query.search.as_deref()).await;
    let total = patients.len();
    Json(PatientsResponse { patients, total })
}

/// GET /patients/:id
async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Patient>> {
    state
        .store
        .get_patient(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Patient"))
}

/// POST /patients
async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PatientInput>,
) -> (StatusCode, Json<Patient>) {
    let patient = state.store.create_patient(input).await;
    tracing::info!(patient_id = %patient.id, "Patient created");
    (StatusCode::CREATED, Json(patient))
}

/// PUT /patients/:id
async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<PatientInput>,
) -> Result<Json<Patient>> {
    state
        .store
        .update_patient(&id, input)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Patient"))
}

/// DELETE /patients/:id
async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode> {
    if state.store.delete_patient(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Patient"))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/patients", get(list).post(create))
        .route("/patients/:id", get(get_one).put(update).delete(delete))
        .with_state(state)
}
