//! Page source trait and HTTP implementation.
//!
//! [`PageSource`] is the seam between the scanner and whatever supplies
//! page markup. The production implementation fetches over HTTP; tests
//! substitute a canned source. A fetcher that drives a real browser
//! engine would plug in here too.

use async_trait::async_trait;
use tracing::warn;

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::retry::RetryStrategy;

// ============================================================================
// Page Source Trait
// ============================================================================

/// A supplier of rendered product-page markup.
///
/// The contract is "a parseable document, or an explicit failure": an
/// implementation either returns the page body or an error the caller
/// converts into a page-level report error.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page body for the given URL.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

// ============================================================================
// HTTP Page Source
// ============================================================================

/// Fetches pages over plain HTTP with retries on transient failures.
pub struct HttpPageSource {
    client: HttpClient,
    retry: RetryStrategy,
}

impl HttpPageSource {
    /// Creates a source with default client and retry settings.
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
            retry: RetryStrategy::default(),
        }
    }

    /// Sets the retry strategy.
    pub fn with_retry(mut self, retry: RetryStrategy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the HTTP client.
    pub fn with_client(mut self, client: HttpClient) -> Self {
        self.client = client;
        self
    }
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 1;
        loop {
            match self.client.get_text(url).await {
                Ok(body) => return Ok(body),
                Err(error) if self.retry.should_retry(&error, attempt) => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    warn!(
                        url = %url,
                        attempt,
                        delay = ?delay,
                        error = %error,
                        "fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Canned page source for exercising callers without a network.
    struct StaticPageSource {
        pages: HashMap<String, String>,
        calls: AtomicU32,
    }

    impl StaticPageSource {
        fn new(pages: HashMap<String, String>) -> Self {
            Self {
                pages,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl PageSource for StaticPageSource {
        async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.pages.get(url).cloned().ok_or(FetchError::HttpStatus {
                status: 404,
                url: url.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let pages = HashMap::from([(
            "https://example.com/p".to_string(),
            "<html></html>".to_string(),
        )]);
        let source: Box<dyn PageSource> = Box::new(StaticPageSource::new(pages));

        let body = source.fetch_page("https://example.com/p").await.unwrap();
        assert_eq!(body, "<html></html>");

        let missing = source.fetch_page("https://example.com/missing").await;
        assert!(matches!(
            missing,
            Err(FetchError::HttpStatus { status: 404, .. })
        ));
    }
}
