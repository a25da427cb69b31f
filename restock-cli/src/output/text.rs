//! Text output formatting with colors.

use restock_core::{PageReport, StockStatus};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    show_reasons: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            show_reasons: false,
        }
    }

    /// Also print the judgment basis for each variant.
    pub fn with_reasons(mut self, show: bool) -> Self {
        self.show_reasons = show;
        self
    }

    /// Formats one report.
    pub fn format_report(&self, report: &PageReport) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  {}",
            self.bold(&report.product_name),
            self.dim(&report.source_url)
        ));

        if let Some(error) = &report.error {
            lines.push(format!("  {} {}", self.red("✗"), error));
        }

        for cell in &report.details {
            let label = self.color_for_status(cell.status, cell.status.label());
            let mut line = format!(
                "  {} {}: {}",
                self.marker(cell.status),
                cell.color_label,
                label
            );
            if self.show_reasons {
                line.push(' ');
                line.push_str(&self.dim(&format!("({})", cell.reason.description())));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    /// Formats a batch of reports with a closing summary line.
    pub fn format_reports(&self, reports: &[PageReport]) -> String {
        let mut sections: Vec<String> = reports
            .iter()
            .map(|report| self.format_report(report))
            .collect();

        let in_stock = reports.iter().filter(|report| report.any_in_stock).count();
        let summary = format!("{in_stock} of {} products in stock", reports.len());
        sections.push(if in_stock > 0 {
            self.green(&summary)
        } else {
            self.dim(&summary)
        });

        sections.join("\n\n")
    }

    fn marker(&self, status: StockStatus) -> String {
        let dot = if status == StockStatus::Unknown {
            "○"
        } else {
            "●"
        };
        self.color_for_status(status, dot)
    }

    fn color_for_status(&self, status: StockStatus, text: &str) -> String {
        let color = match status {
            StockStatus::InStock => GREEN,
            StockStatus::OutOfStock => RED,
            StockStatus::Indeterminate => YELLOW,
            StockStatus::Unknown => DIM,
        };
        self.paint(color, text)
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
