//! Configuration for the clinic backend.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Public booking link configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Base URL patients reach the service on. The `/book` path is appended
    /// to build the QR payload.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
        }
    }
}

/// Third-party QR image endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    #[serde(default = "default_qr_api_base_url")]
    pub api_base_url: String,
    /// Image edge length in pixels when the request does not specify one.
    #[serde(default = "default_qr_size")]
    pub default_size: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_qr_api_base_url(),
            default_size: default_qr_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_origins")]
    pub origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_cors_origins(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_qr_api_base_url() -> String {
    "https://api.qrserver.com/v1/create-qr-code/".to_string()
}
fn default_qr_size() -> u32 {
    300
}
fn default_cors_origins() -> String {
    "*".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (CLINIC__SECTION__KEY format)
    /// 2. config.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("booking.public_base_url", default_public_base_url())?
            .set_default("qr.api_base_url", default_qr_api_base_url())?
            .set_default("qr.default_size", default_qr_size() as i64)?
            .set_default("cors.origins", default_cors_origins())?
            .set_default("logging.level", default_log_level())?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("CLINIC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_default_qr_config() {
        let qr = QrConfig::default();
        assert_eq!(qr.api_base_url, "https://api.qrserver.com/v1/create-qr-code/");
        assert_eq!(qr.default_size, 300);
    }

    #[test]
    fn test_default_booking_config() {
        let booking = BookingConfig::default();
        assert_eq!(booking.public_base_url, "http://localhost:8080");
    }
}
