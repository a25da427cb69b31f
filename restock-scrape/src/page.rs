//! Page scanning: extraction, classification, aggregation.

use scraper::Html;
use tracing::{debug, warn};

use restock_core::{classify_with, PageReport, Precedence, UNKNOWN_PRODUCT};

use crate::error::ScrapeError;
use crate::extract::{extract_cells, extract_product_name};

/// Scans one product page under the canonical text-first precedence.
pub fn scan_page(html: &str, source_url: &str) -> PageReport {
    scan_page_with(html, source_url, Precedence::TextFirst)
}

/// Scans one product page under an explicit precedence.
///
/// Never fails: a page without a stock container produces a report with
/// the fixed container diagnostic, so one unrecognizable page cannot
/// abort a batch. The HTML parser itself is lenient and accepts any
/// input.
pub fn scan_page_with(html: &str, source_url: &str, precedence: Precedence) -> PageReport {
    let document = Html::parse_document(html);

    let product_name = extract_product_name(&document).unwrap_or_else(|| {
        warn!(url = %source_url, "product name not found, using placeholder");
        UNKNOWN_PRODUCT.to_string()
    });

    match extract_cells(&document) {
        Ok(cells) => {
            debug!(
                url = %source_url,
                product = %product_name,
                cells = cells.len(),
                "scanned product page"
            );
            let details = cells
                .iter()
                .map(|cell| classify_with(cell, precedence))
                .collect();
            PageReport::from_cells(product_name, source_url, details)
        }
        Err(ScrapeError::ContainerNotFound) => {
            warn!(url = %source_url, "stock container not found");
            PageReport::container_missing(product_name, source_url)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
