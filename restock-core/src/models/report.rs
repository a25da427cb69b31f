//! Classified cells and per-page reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::status::{ReasonCode, StockStatus};

/// Diagnostic recorded when the stock container is absent from a page.
pub const CONTAINER_MISSING_DIAGNOSTIC: &str = "在庫情報が見つかりませんでした";

/// Product name recorded when the title could not be extracted.
pub const UNKNOWN_PRODUCT: &str = "不明な商品";

// ============================================================================
// Classified Cell
// ============================================================================

/// One judged color variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCell {
    /// Color label carried over from the raw cell.
    #[serde(rename = "color")]
    pub color_label: String,
    /// The availability judgment.
    pub status: StockStatus,
    /// Which rule produced the judgment.
    #[serde(rename = "reasonCode")]
    pub reason: ReasonCode,
}

impl ClassifiedCell {
    /// Creates a classified cell.
    pub fn new(color_label: impl Into<String>, status: StockStatus, reason: ReasonCode) -> Self {
        Self {
            color_label: color_label.into(),
            status,
            reason,
        }
    }
}

// ============================================================================
// Page Report
// ============================================================================

/// The aggregated result of checking one product page.
///
/// A report is created fresh per check per URL and never mutated after
/// construction. `details` preserves the order in which cells were
/// discovered in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    /// Product name, or a placeholder when extraction failed.
    pub product_name: String,
    /// The page this report was produced from.
    pub source_url: String,
    /// True iff at least one variant classified as `InStock`.
    pub any_in_stock: bool,
    /// Per-variant judgments, in document order.
    pub details: Vec<ClassifiedCell>,
    /// Page-level failure, if the page could not be checked.
    pub error: Option<String>,
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
}

impl PageReport {
    /// Builds a report from classified cells, computing the page flag.
    pub fn from_cells(
        product_name: impl Into<String>,
        source_url: impl Into<String>,
        details: Vec<ClassifiedCell>,
    ) -> Self {
        let any_in_stock = details.iter().any(|cell| cell.status.is_purchasable());
        Self {
            product_name: product_name.into(),
            source_url: source_url.into(),
            any_in_stock,
            details,
            error: None,
            checked_at: Utc::now(),
        }
    }

    /// Builds the report for a page whose stock container was not found.
    ///
    /// This is a normal, reportable outcome, not an exception: the page
    /// loaded but carried no recognizable stock table.
    pub fn container_missing(
        product_name: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            source_url: source_url.into(),
            any_in_stock: false,
            details: Vec::new(),
            error: Some(CONTAINER_MISSING_DIAGNOSTIC.to_string()),
            checked_at: Utc::now(),
        }
    }

    /// Builds the report for a page that could not be fetched or scanned.
    ///
    /// The product name falls back to the URL since nothing was extracted.
    pub fn failed(source_url: impl Into<String>, reason: impl Into<String>) -> Self {
        let source_url = source_url.into();
        Self {
            product_name: source_url.clone(),
            source_url,
            any_in_stock: false,
            details: Vec::new(),
            error: Some(reason.into()),
            checked_at: Utc::now(),
        }
    }

    /// Returns the purchasable variants, in document order.
    pub fn in_stock_details(&self) -> impl Iterator<Item = &ClassifiedCell> {
        self.details
            .iter()
            .filter(|cell| cell.status.is_purchasable())
    }

    /// Returns true if the page could not be checked.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Checks the report's structural invariants.
    ///
    /// Reports built through the constructors always satisfy these; a
    /// report deserialized from elsewhere may not.
    pub fn validate(&self) -> Result<(), CoreError> {
        let computed = self.details.iter().any(|cell| cell.status.is_purchasable());
        if self.any_in_stock != computed {
            return Err(CoreError::InvalidReport(format!(
                "anyInStock is {} but details say {}",
                self.any_in_stock, computed
            )));
        }
        if self.error.is_some() && !self.details.is_empty() {
            return Err(CoreError::InvalidReport(
                "a failed report must not carry details".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn in_stock(color: &str) -> ClassifiedCell {
        ClassifiedCell::new(color, StockStatus::InStock, ReasonCode::PositiveText)
    }

    fn out_of_stock(color: &str) -> ClassifiedCell {
        ClassifiedCell::new(color, StockStatus::OutOfStock, ReasonCode::NegativeText)
    }

    #[test]
    fn test_any_in_stock_requires_one_in_stock_detail() {
        let report = PageReport::from_cells(
            "Edge 40",
            "https://example.com/p",
            vec![out_of_stock("Black"), in_stock("White")],
        );
        assert!(report.any_in_stock);
        assert_eq!(report.in_stock_details().count(), 1);
        report.validate().unwrap();
    }

    #[test]
    fn test_all_out_of_stock_is_not_in_stock() {
        let report = PageReport::from_cells(
            "Edge 40",
            "https://example.com/p",
            vec![out_of_stock("Black"), out_of_stock("White")],
        );
        assert!(!report.any_in_stock);
        report.validate().unwrap();
    }

    #[test]
    fn test_empty_details_is_not_in_stock() {
        let report = PageReport::from_cells("Edge 40", "https://example.com/p", Vec::new());
        assert!(!report.any_in_stock);
        assert!(!report.has_error());
    }

    #[test]
    fn test_indeterminate_does_not_count_as_in_stock() {
        let report = PageReport::from_cells(
            "Edge 40",
            "https://example.com/p",
            vec![ClassifiedCell::new(
                "Black",
                StockStatus::Indeterminate,
                ReasonCode::IconOnly,
            )],
        );
        assert!(!report.any_in_stock);
    }

    #[test]
    fn test_container_missing_shape() {
        let report = PageReport::container_missing("Edge 40", "https://example.com/p");
        assert!(report.details.is_empty());
        assert_eq!(report.error.as_deref(), Some(CONTAINER_MISSING_DIAGNOSTIC));
        assert!(!report.any_in_stock);
        report.validate().unwrap();
    }

    #[test]
    fn test_failed_falls_back_to_url() {
        let report = PageReport::failed("https://example.com/p", "connection refused");
        assert_eq!(report.product_name, "https://example.com/p");
        assert_eq!(report.error.as_deref(), Some("connection refused"));
        assert!(!report.any_in_stock);
        report.validate().unwrap();
    }

    #[test]
    fn test_details_preserve_order() {
        let report = PageReport::from_cells(
            "Edge 40",
            "https://example.com/p",
            vec![in_stock("Black"), out_of_stock("White"), in_stock("Red")],
        );
        let colors: Vec<&str> = report
            .details
            .iter()
            .map(|cell| cell.color_label.as_str())
            .collect();
        assert_eq!(colors, ["Black", "White", "Red"]);
    }

    #[test]
    fn test_validate_rejects_inconsistent_flag() {
        let mut report = PageReport::from_cells(
            "Edge 40",
            "https://example.com/p",
            vec![out_of_stock("Black")],
        );
        report.any_in_stock = true;
        assert!(report.validate().is_err());
    }
}
