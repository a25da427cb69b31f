//! Scrape error types.

use thiserror::Error;

/// Error type for document scanning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrapeError {
    /// The stock-information container is absent from the document.
    ///
    /// Recoverable: page scanning converts this into a report-level
    /// diagnostic instead of failing the batch.
    #[error("stock container not found in document")]
    ContainerNotFound,
}
