//! Fetch error types.

use thiserror::Error;

/// Error type for page fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// The status code received.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with an empty body.
    #[error("Empty response body from {0}")]
    EmptyBody(String),
}

impl FetchError {
    /// Returns true if retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(err) => err.is_connect() || err.is_timeout(),
            Self::HttpStatus { status, .. } => *status == 429 || (500..600).contains(status),
            Self::InvalidUrl(_) | Self::EmptyBody(_) => false,
        }
    }
}
