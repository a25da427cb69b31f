//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use restock_core::PageReport;

// ============================================================================
// Output Types
// ============================================================================

/// Envelope for a batch of reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutput<'a> {
    /// Number of pages checked.
    pub checked: usize,
    /// Number of pages with at least one purchasable variant.
    pub in_stock: usize,
    /// True if anything anywhere is purchasable.
    pub any_in_stock: bool,
    /// When this output was generated.
    pub generated_at: DateTime<Utc>,
    /// The per-page reports, in input order.
    pub reports: &'a [PageReport],
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter for reports.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes one report.
    pub fn format_report(&self, report: &PageReport) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        })
    }

    /// Serializes a batch of reports with summary fields.
    pub fn format_reports(&self, reports: &[PageReport]) -> Result<String> {
        let in_stock = reports.iter().filter(|report| report.any_in_stock).count();
        let batch = BatchOutput {
            checked: reports.len(),
            in_stock,
            any_in_stock: in_stock > 0,
            generated_at: Utc::now(),
            reports,
        };

        Ok(if self.pretty {
            serde_json::to_string_pretty(&batch)?
        } else {
            serde_json::to_string(&batch)?
        })
    }
}
