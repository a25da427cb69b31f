// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Restock Core
//!
//! Core types and classification rules for the Restock stock monitor.
//!
//! This crate holds everything that can be decided without touching the
//! network or a real document: the raw signals extracted from one stock
//! cell, the ordered rule table that turns those signals into a status,
//! and the per-page report that aggregates the results.
//!
//! ## Key Types
//!
//! - [`RawCell`] - the signals extracted from one color variant's cell
//! - [`StockStatus`] - the four-state availability judgment
//! - [`ReasonCode`] - which rule produced a judgment (for audit)
//! - [`ClassifiedCell`] - one judged variant
//! - [`PageReport`] - aggregated per-page result
//! - [`Precedence`] - which rule ordering to apply
//!
//! Classification is a pure function: same cell in, same judgment out,
//! no I/O and no logging. Callers decide what to do with the reason
//! codes (log them, render them, ignore them).

pub mod classify;
pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export classification entry points
pub use classify::{classify, classify_with, Precedence, Rule};

// Re-export all model types
pub use models::{
    ClassifiedCell, PageReport, RawCell, ReasonCode, StockStatus, CONTAINER_MISSING_DIAGNOSTIC,
    UNKNOWN_COLOR_LABEL, UNKNOWN_PRODUCT,
};
