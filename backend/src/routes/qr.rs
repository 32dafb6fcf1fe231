//! QR code routes for the public booking link.
//!
//! The image itself comes from a third-party endpoint; `/qr/image` proxies
//! it so the caller can download the PNG without leaving the app origin.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::qr::{booking_url, clamp_size};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct SizeQuery {
    size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrLinkResponse {
    pub booking_url: String,
    pub image_url: String,
    /// Pixel size actually used after clamping.
    pub size: u32,
}

/// GET /qr/link - The booking URL and the upstream image URL for it.
async fn link(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SizeQuery>,
) -> Result<Json<QrLinkResponse>> {
    let size = clamp_size(query.size, state.config.qr.default_size);
    let booking_url = booking_url(&state.config.booking.public_base_url);
    let image_url = state
        .qr_client
        .image_url(&booking_url, size)
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(QrLinkResponse {
        booking_url,
        image_url,
        size,
    }))
}

/// GET /qr/image - Fetch the PNG from the upstream endpoint.
///
/// Failures here are recoverable; the caller just retries the download.
async fn image(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SizeQuery>,
) -> Result<Response> {
    let size = clamp_size(query.size, state.config.qr.default_size);
    let booking_url = booking_url(&state.config.booking.public_base_url);

    let png = state
        .qr_client
        .fetch_png(&booking_url, size)
        .await
        .map_err(|e| {
            tracing::warn!("QR image fetch failed: {}", e);
            ApiError::Upstream(e.to_string())
        })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"appointment-booking-qr.png\"".to_string(),
            ),
        ],
        png,
    )
        .into_response())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/qr/link", get(link))
        .route("/qr/image", get(image))
        .with_state(state)
}
