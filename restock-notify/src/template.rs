//! Notification email rendering.

use chrono::Local;

use restock_core::PageReport;

/// Plain-text alternative body for clients that cannot render HTML.
const TEXT_FALLBACK: &str = "在庫のある商品が見つかりました。詳細はHTMLメールをご確認ください。";

/// A rendered stock notification, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEmail {
    /// Subject line.
    pub subject: String,
    /// HTML body: one table row per color variant of each in-stock product.
    pub html_body: String,
    /// Plain-text alternative body.
    pub text_body: String,
}

impl StockEmail {
    /// Renders a notification for the reports that have stock.
    ///
    /// Reports with `any_in_stock == false` are skipped entirely; returns
    /// `None` when nothing is in stock, so the caller can skip delivery.
    pub fn render(reports: &[PageReport]) -> Option<Self> {
        let in_stock: Vec<&PageReport> = reports.iter().filter(|r| r.any_in_stock).collect();
        if in_stock.is_empty() {
            return None;
        }

        let subject = format!(
            "【在庫あり】商品在庫通知 ({})",
            Local::now().format("%Y-%m-%d %H:%M")
        );

        let mut html = String::from(
            r#"<html>
<head>
<style>
body { font-family: Arial, sans-serif; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
.stock-available { color: green; font-weight: bold; }
.stock-unavailable { color: red; }
</style>
</head>
<body>
<h2>商品在庫通知</h2>
<p>以下の商品に在庫があります：</p>
<table>
<tr><th>商品名</th><th>カラー</th><th>在庫状況</th></tr>
"#,
        );

        for report in &in_stock {
            for detail in &report.details {
                let class = if detail.status.is_purchasable() {
                    "stock-available"
                } else {
                    "stock-unavailable"
                };
                html.push_str(&format!(
                    "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
                    escape_html(&report.source_url),
                    escape_html(&report.product_name),
                    escape_html(&detail.color_label),
                    class,
                    detail.status.label(),
                ));
            }
        }

        html.push_str(
            "</table>\n<p>商品ページにアクセスするには、商品名をクリックしてください。</p>\n</body>\n</html>\n",
        );

        Some(Self {
            subject,
            html_body: html,
            text_body: TEXT_FALLBACK.to_string(),
        })
    }
}

/// Escapes text for embedding in the HTML body.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================
