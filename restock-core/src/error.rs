//! Core error types for Restock.

use thiserror::Error;

/// Core error type for Restock operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A report violates one of its structural invariants.
    #[error("Invalid report: {0}")]
    InvalidReport(String),
}
