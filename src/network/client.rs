use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::photo::{MarsPhoto, decode_photos};

/// Default origin of the Mars photo service.
pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com";

/// Resource path appended to the base URL.
pub const PHOTOS_PATH: &str = "photos";

/// Errors that can occur while fetching the photo listing.
///
/// The view model collapses all of these into a single failed state;
/// the variants exist so the cause can be logged.
#[derive(Debug)]
pub enum FetchError {
    /// Client could not be built (bad TLS backend, invalid settings).
    Config(String),
    /// Transport failure: unreachable host, timeout, interrupted transfer.
    Network(String),
    /// Server answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not a JSON array of photo records.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the photo listing.
///
/// One call, one outcome. Implementations must not retry or cache.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Fetches the full listing in server order.
    async fn fetch_photos(&self) -> Result<Vec<MarsPhoto>, FetchError>;
}

/// HTTP client for the Mars photo service.
///
/// Construct one per process and share it behind an `Arc`.
pub struct MarsApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl MarsApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Full URL of the photo listing.
    pub fn photos_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), PHOTOS_PATH)
    }
}

#[async_trait]
impl PhotoSource for MarsApiClient {
    fn name(&self) -> &str {
        "mars-api"
    }

    async fn fetch_photos(&self) -> Result<Vec<MarsPhoto>, FetchError> {
        let url = self.photos_url();
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Mars API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Mars API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let photos = decode_photos(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        info!("Decoded {} photos ({} bytes)", photos.len(), body.len());
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photos_url_joins_path() {
        let client = MarsApiClient::new("http://localhost:8080", Duration::from_secs(1)).unwrap();
        assert_eq!(client.photos_url(), "http://localhost:8080/photos");
    }

    #[test]
    fn test_photos_url_trims_trailing_slash() {
        let client = MarsApiClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.photos_url(), "http://localhost:8080/photos");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): down");
        assert_eq!(
            FetchError::Parse("eof".to_string()).to_string(),
            "parse error: eof"
        );
    }
}
