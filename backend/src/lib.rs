pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod qr;
pub mod routes;
pub mod store;
pub mod test_util;

pub use auth::{CurrentUser, SessionStore};
pub use config::{BookingConfig, Config, QrConfig};
pub use error::ApiError;
pub use qr::QrClient;
pub use store::ClinicStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Live sessions issued by the login gate.
    pub sessions: SessionStore,
    /// In-memory clinic data, seeded on startup.
    pub store: ClinicStore,
    /// Client for the third-party QR image endpoint.
    pub qr_client: QrClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let qr_client = QrClient::new(&config.qr.api_base_url);
        Self {
            config,
            sessions: SessionStore::new(),
            store: ClinicStore::seeded(),
            qr_client,
        }
    }
}
