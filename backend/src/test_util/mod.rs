//! Helpers for building test state. Used by unit and integration tests.

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::config::{BookingConfig, Config, CorsConfig, LoggingConfig, QrConfig, ServerConfig};
use crate::qr::QrClient;
use crate::store::ClinicStore;
use crate::AppState;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        booking: BookingConfig {
            public_base_url: "http://localhost:8080".to_string(),
        },
        qr: QrConfig {
            api_base_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            default_size: 300,
        },
        cors: CorsConfig {
            origins: "*".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// State over the seeded store with the default test config.
pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_config()))
}

/// State whose QR client points at `qr_api_base_url` (a wiremock server in
/// tests).
pub fn test_state_with_qr_upstream(qr_api_base_url: &str) -> Arc<AppState> {
    let mut config = test_config();
    config.qr.api_base_url = qr_api_base_url.to_string();
    Arc::new(AppState {
        config: config.clone(),
        sessions: SessionStore::new(),
        store: ClinicStore::seeded(),
        qr_client: QrClient::new(&config.qr.api_base_url),
    })
}
