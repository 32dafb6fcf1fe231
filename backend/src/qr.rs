//! Client for the third-party QR image endpoint.
//!
//! QR generation is delegated upstream; this only builds the request URL and
//! proxies the PNG bytes back for download.

use reqwest::{Client, Url};

/// Pixel bounds the upstream accepts from us.
pub const MIN_SIZE: u32 = 100;
pub const MAX_SIZE: u32 = 800;

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("Invalid QR endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    #[error("QR endpoint returned status {0}")]
    BadStatus(u16),
}

pub struct QrClient {
    http_client: Client,
    api_base_url: String,
}

impl QrClient {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            api_base_url: api_base_url.to_string(),
        }
    }

    /// URL of a `size`x`size` PNG encoding `data`.
    pub fn image_url(&self, data: &str, size: u32) -> Result<String, QrError> {
        let url = Url::parse_with_params(
            &self.api_base_url,
            &[
                ("size", format!("{}x{}", size, size)),
                ("data", data.to_string()),
                ("format", "png".to_string()),
                ("margin", "10".to_string()),
            ],
        )
        .map_err(|e| QrError::InvalidUrl(e.to_string()))?;
        Ok(url.to_string())
    }

    /// Fetch the PNG bytes from the upstream endpoint.
    pub async fn fetch_png(&self, data: &str, size: u32) -> Result<Vec<u8>, QrError> {
        let url = self.image_url(data, size)?;
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| QrError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QrError::BadStatus(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| QrError::RequestFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Normalize a requested pixel size into the accepted range.
pub fn clamp_size(requested: Option<u32>, default: u32) -> u32 {
    requested.unwrap_or(default).clamp(MIN_SIZE, MAX_SIZE)
}

/// The public booking URL the QR code points at.
pub fn booking_url(public_base_url: &str) -> String {
    format!("{}/book", public_base_url.trim_end_matches('/'))
}
