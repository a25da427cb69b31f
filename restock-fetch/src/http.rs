//! HTTP client with tracing and a browser-like user agent.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::FetchError;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Desktop-browser user agent.
///
/// The storefront serves a reduced page to clients it does not recognize
/// as browsers, and the stock table is part of what gets dropped.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper used by [`crate::HttpPageSource`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built. This should only occur
    /// if the system's TLS configuration is fundamentally broken, making
    /// network operations impossible.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to create HTTP client: {e}. \
                    This usually indicates a broken TLS configuration."
                )
            });

        Self { inner: client }
    }

    /// Fetches a page body as text.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        debug!("GET request");
        let response = self.inner.get(url).send().await?;
        let status = response.status();
        debug!(status = %status, "Response received");

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody(url.to_string()));
        }

        debug!(bytes = body.len(), "Body received");
        Ok(body)
    }

    /// Returns the inner reqwest client for advanced operations.
    pub fn inner(&self) -> &Client {
        &self.inner
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
