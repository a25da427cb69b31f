//! Retry strategy for page fetches.

use std::time::Duration;

use crate::error::FetchError;

/// Strategy for retrying failed requests.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay between retries in seconds.
    pub base_delay_secs: u64,
    /// Whether to use exponential backoff.
    pub exponential_backoff: bool,
    /// Maximum delay between retries.
    pub max_delay_secs: u64,
}

impl RetryStrategy {
    /// Creates a new retry strategy.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay_secs: 1,
            exponential_backoff: true,
            max_delay_secs: 60,
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay_secs: 0,
            exponential_backoff: false,
            max_delay_secs: 0,
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, secs: u64) -> Self {
        self.base_delay_secs = secs;
        self
    }

    /// Enables or disables exponential backoff.
    pub fn with_exponential_backoff(mut self, enabled: bool) -> Self {
        self.exponential_backoff = enabled;
        self
    }

    /// Calculates the delay for a given attempt number (1-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = if self.exponential_backoff {
            self.base_delay_secs * 2u64.pow(attempt.saturating_sub(1))
        } else {
            self.base_delay_secs
        };

        Duration::from_secs(delay.min(self.max_delay_secs))
    }

    /// Determines if a failed fetch should be retried.
    pub fn should_retry(&self, error: &FetchError, attempt: u32) -> bool {
        attempt < self.max_attempts && error.is_transient()
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error() -> FetchError {
        FetchError::HttpStatus {
            status: 503,
            url: "https://example.com/p".to_string(),
        }
    }

    #[test]
    fn test_exponential_backoff() {
        let strategy = RetryStrategy::default();

        assert_eq!(strategy.delay_for_attempt(1), Duration::from_secs(1));
        assert_eq!(strategy.delay_for_attempt(2), Duration::from_secs(2));
        assert_eq!(strategy.delay_for_attempt(3), Duration::from_secs(4));
        assert_eq!(strategy.delay_for_attempt(4), Duration::from_secs(8));
    }

    #[test]
    fn test_max_delay_cap() {
        let strategy = RetryStrategy::new(10).with_base_delay(10);

        // Capped at 60 seconds
        assert_eq!(strategy.delay_for_attempt(5), Duration::from_secs(60));
    }

    #[test]
    fn test_retries_transient_errors_until_exhausted() {
        let strategy = RetryStrategy::new(3);
        assert!(strategy.should_retry(&server_error(), 1));
        assert!(strategy.should_retry(&server_error(), 2));
        assert!(!strategy.should_retry(&server_error(), 3));
    }

    #[test]
    fn test_never_retries_permanent_errors() {
        let strategy = RetryStrategy::new(3);
        let not_found = FetchError::HttpStatus {
            status: 404,
            url: "https://example.com/p".to_string(),
        };
        assert!(!strategy.should_retry(&not_found, 1));

        let invalid = FetchError::InvalidUrl("nope".to_string());
        assert!(!strategy.should_retry(&invalid, 1));
    }

    #[test]
    fn test_rate_limit_is_transient() {
        let rate_limited = FetchError::HttpStatus {
            status: 429,
            url: "https://example.com/p".to_string(),
        };
        assert!(rate_limited.is_transient());
    }
}
