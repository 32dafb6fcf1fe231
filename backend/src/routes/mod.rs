//! HTTP routes.
//!
//! Two route trees exist: the public one (health, the booking form and the
//! login/logout endpoints) and the gated one, which sits behind the session
//! middleware. The user directory is additionally admin-only.

pub mod appointments;
pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod doctors;
pub mod health;
pub mod nav;
pub mod patients;
pub mod qr;
pub mod users;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::AppState;

/// Assemble the full application router. Layers (CORS, tracing) are added
/// by the caller.
pub fn app(state: Arc<AppState>) -> Router {
    let public = Router::new()
        .merge(health::router())
        .merge(auth::router(state.clone()))
        .merge(booking::router(state.clone()));

    let gated = Router::new()
        .merge(auth::session_router(state.clone()))
        .merge(nav::router(state.clone()))
        .merge(patients::router(state.clone()))
        .merge(doctors::router(state.clone()))
        .merge(appointments::router(state.clone()))
        .merge(dashboard::router(state.clone()))
        .merge(qr::router(state.clone()))
        .nest("/users", users::router(state.clone()))
        .layer(middleware::from_fn_with_state(
            state,
            crate::auth::require_session,
        ));

    public.merge(gated)
}
