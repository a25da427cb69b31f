// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Restock Fetch
//!
//! Fetches rendered product pages over HTTP for the Restock scanner.
//!
//! The fetch layer is the only part of the system that blocks, so it is
//! the seam where everything replaceable lives:
//!
//! - [`PageSource`] - the trait the scanner consumes pages through
//! - [`HttpPageSource`] - reqwest-backed implementation with retries
//! - [`HttpClient`] - the underlying client with tracing and a
//!   browser-like user agent
//! - [`RetryStrategy`] - backoff policy for transient failures
//!
//! Each page fetch is independent; callers may fetch pages concurrently
//! and must convert per-page failures into report-level errors rather
//! than aborting a batch.

pub mod error;
pub mod http;
pub mod retry;
pub mod source;

pub use error::FetchError;
pub use http::HttpClient;
pub use retry::RetryStrategy;
pub use source::{HttpPageSource, PageSource};
