//! Cell extraction from parsed product pages.
//!
//! Extraction populates whichever [`RawCell`] fields are discoverable and
//! leaves the rest empty; it never judges. Cells are yielded in document
//! order, and that order is preserved all the way into the final report.

use std::collections::HashSet;

use scraper::{ElementRef, Html};
use tracing::{debug, trace};

use restock_core::{RawCell, UNKNOWN_COLOR_LABEL};

use crate::error::ScrapeError;
use crate::selectors;

/// Extracts the product name from the page title heading.
///
/// Returns `None` when the heading is absent or empty; the caller decides
/// on a placeholder.
pub fn extract_product_name(document: &Html) -> Option<String> {
    document
        .select(&selectors::PRODUCT_TITLE)
        .next()
        .map(collect_text)
        .filter(|text| !text.is_empty())
}

/// Extracts every stock cell from the document, in document order.
///
/// The stock container must be present; an absent container is the
/// recoverable [`ScrapeError::ContainerNotFound`] outcome. Cells with no
/// signals at all are still yielded, so the classifier can report them as
/// unknown rather than silently dropping a variant.
pub fn extract_cells(document: &Html) -> Result<Vec<RawCell>, ScrapeError> {
    let container = document
        .select(&selectors::STOCK_CONTAINER)
        .next()
        .ok_or(ScrapeError::ContainerNotFound)?;

    let cell_ids: HashSet<_> = container
        .select(&selectors::STOCK_CELL)
        .map(|cell| cell.id())
        .collect();

    // Walk the whole document in order, tracking the last heading seen.
    // This matches "nearest preceding heading" resolution: a heading that
    // sits before the container still labels the first cell.
    let mut last_heading: Option<String> = None;
    let mut cells = Vec::with_capacity(cell_ids.len());

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        if element.value().name() == selectors::HEADING_TAG {
            last_heading = Some(collect_text(element));
            continue;
        }

        if cell_ids.contains(&element.id()) {
            let cell = raw_cell_from(element, last_heading.clone());
            trace!(
                color = %cell.color_label,
                text = %cell.text,
                attribute = ?cell.status_attribute,
                "extracted stock cell"
            );
            cells.push(cell);
        }
    }

    debug!(count = cells.len(), "stock cells extracted");
    Ok(cells)
}

/// Builds a raw cell from one stock-indicator element.
fn raw_cell_from(cell: ElementRef<'_>, heading: Option<String>) -> RawCell {
    let text = collect_text(cell);

    let status_attribute = cell
        .value()
        .attr(selectors::STOCK_STATUS_ATTR)
        .map(str::to_string);

    let icon_classes = cell
        .select(&selectors::ICON)
        .next()
        .map(|icon| icon.value().classes().map(str::to_string).collect())
        .unwrap_or_default();

    RawCell {
        color_label: heading.unwrap_or_else(|| UNKNOWN_COLOR_LABEL.to_string()),
        text,
        status_attribute,
        icon_classes,
    }
}

/// Concatenates and trims an element's descendant text.
fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

// ============================================================================
// Tests
// ============================================================================
