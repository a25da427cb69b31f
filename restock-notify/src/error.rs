//! Notification error types.

use thiserror::Error;

/// Error type for email notification delivery.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A sender or recipient address could not be parsed.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
