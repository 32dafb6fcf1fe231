//! Public booking routes.
//!
//! These never consult the session gate: a patient scanning the QR code
//! lands here without logging in. A submitted booking is only logged; no
//! record is created and no network call leaves the service.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clinic_common::{AppointmentType, Doctor};

use crate::error::{ApiError, Result};
use crate::store::seed;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AppointmentTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything the booking form needs to render.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingContext {
    pub doctors: Vec<Doctor>,
    pub available_times: Vec<NaiveTime>,
    pub appointment_types: Vec<AppointmentTypeOption>,
}

/// GET /book/context
async fn context(State(state): State<Arc<AppState>>) -> Json<BookingContext> {
    let doctors = state.store.list_doctors(true).await;
    Json(BookingContext {
        doctors,
        available_times: seed::bookable_times(),
        appointment_types: AppointmentType::ALL
            .iter()
            .map(|t| AppointmentTypeOption {
                value: t.value(),
                label: t.label(),
            })
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    /// Reference the patient can quote when the practice calls back.
    pub reference: String,
    pub message: String,
}

/// POST /book - Accept a booking request from the public form.
async fn submit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>> {
    for (field, value) in [
        ("firstName", &req.first_name),
        ("lastName", &req.last_name),
        ("phone", &req.phone),
        ("email", &req.email),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::InvalidRequest(format!("{} is required", field)));
        }
    }

    let Some(doctor) = state.store.get_doctor(&req.doctor_id).await else {
        return Err(ApiError::InvalidRequest(format!(
            "unknown doctor id '{}'",
            req.doctor_id
        )));
    };

    let reference = Uuid::new_v4().simple().to_string();

    // The booking is logged, not stored. Follow-up happens out of band.
    tracing::info!(
        reference = %reference,
        patient = %format!("{} {}", req.first_name.trim(), req.last_name.trim()),
        phone = %req.phone,
        email = %req.email,
        doctor = %format!("{} {}", doctor.first_name, doctor.last_name),
        date = %req.date,
        time = %req.time,
        appointment_type = %req.appointment_type.value(),
        "Booking request submitted"
    );

    Ok(Json(BookingResponse {
        success: true,
        reference,
        message: "Appointment booking request submitted! You will receive a confirmation shortly."
            .to_string(),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/book", post(submit))
        .route("/book/context", get(context))
        .with_state(state)
}
