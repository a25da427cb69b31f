// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Restock Scrape
//!
//! Locates the stock-information container in a rendered product page and
//! turns its cells into [`restock_core::RawCell`] records, then runs the
//! classifier over them to produce a [`restock_core::PageReport`].
//!
//! The markers this crate looks for live in [`selectors`]; when the source
//! page's markup changes, that module is the single place to update.

pub mod error;
pub mod extract;
pub mod page;
pub mod selectors;

pub use error::ScrapeError;
pub use extract::{extract_cells, extract_product_name};
pub use page::{scan_page, scan_page_with};
