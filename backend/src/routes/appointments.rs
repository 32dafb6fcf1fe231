//! Appointment routes.
//!
//! No conflict detection: overlapping bookings for a doctor are accepted,
//! matching the behavior of the calendar this replaces.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use clinic_common::Appointment;

use crate::error::{ApiError, Result};
use crate::store::{AppointmentFilter, AppointmentInput, AppointmentUpdate};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
    pub total: usize,
}

/// GET /appointments - List appointments, filtered by date/doctor/status and
/// ordered by date then time.
async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<AppointmentFilter>,
) -> Json<AppointmentsResponse> {
    let appointments = state.store.list_appointments(&filter).await;
    let total = appointments.len();
    Json(AppointmentsResponse { appointments, total })
}

/// POST /appointments
async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AppointmentInput>,
) -> Result<(StatusCode, Json<Appointment>)> {
    if state.store.get_doctor(&input.doctor_id).await.is_none() {
        return Err(ApiError::InvalidRequest(format!(
            "unknown doctor id '{}'",
            input.doctor_id
        )));
    }
    if state.store.get_patient(&input.patient_id).await.is_none() {
        return Err(ApiError::InvalidRequest(format!(
            "unknown patient id '{}'",
            input.patient_id
        )));
    }

    let appointment = state.store.create_appointment(input).await;
    tracing::info!(appointment_id = %appointment.id, "Appointment created");
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// PUT /appointments/:id - Partial update (reschedule, status change, notes).
async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<AppointmentUpdate>,
) -> Result<Json<Appointment>> {
    state
        .store
        .update_appointment(&id, update)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Appointment"))
}

/// DELETE /appointments/:id
async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<StatusCode> {
    if state.store.delete_appointment(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Appointment"))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/appointments", get(list).post(create))
        .route("/appointments/:id", axum::routing::put(update).delete(delete))
        .with_state(state)
}
