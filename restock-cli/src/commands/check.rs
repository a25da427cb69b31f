//! Check command - one-shot stock check over the configured URLs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use futures::future::join_all;
use tracing::{info, warn};

use restock_core::{PageReport, Precedence};
use restock_fetch::{HttpPageSource, PageSource};
use restock_notify::{Mailer, StockEmail};
use restock_scrape::scan_page_with;

use crate::config;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for check command.
#[derive(Args, Default)]
pub struct CheckArgs {
    /// Product page URLs to check; defaults to $PRODUCT_URLS.
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Email the report when any variant is in stock.
    #[arg(long)]
    pub notify: bool,

    /// Write each fetched page into this directory for selector debugging.
    #[arg(long, value_name = "DIR")]
    pub dump_html: Option<PathBuf>,
}

/// Runs the check command.
pub async fn run(args: &CheckArgs, cli: &Cli) -> Result<()> {
    let urls = resolve_urls(args)?;
    info!(count = urls.len(), "checking product pages");

    let source = HttpPageSource::new();
    let reports = check_all(&source, &urls, cli.precedence(), args.dump_html.as_deref()).await;

    print_reports(&reports, cli)?;

    let in_stock = reports.iter().filter(|report| report.any_in_stock).count();
    info!(total = reports.len(), in_stock, "check finished");

    if args.notify {
        notify(&reports).await?;
    }

    Ok(())
}

fn resolve_urls(args: &CheckArgs) -> Result<Vec<String>> {
    if args.urls.is_empty() {
        config::product_urls()
    } else {
        config::validate_urls(&args.urls)?;
        Ok(args.urls.clone())
    }
}

/// Checks every URL concurrently.
///
/// Pages are independent, so a failed fetch becomes that page's report
/// error and never aborts the rest of the batch.
pub async fn check_all(
    source: &dyn PageSource,
    urls: &[String],
    precedence: Precedence,
    dump_dir: Option<&Path>,
) -> Vec<PageReport> {
    join_all(urls.iter().map(|url| async move {
        match source.fetch_page(url).await {
            Ok(html) => {
                if let Some(dir) = dump_dir {
                    dump_page(dir, url, &html);
                }
                scan_page_with(&html, url, precedence)
            }
            Err(error) => {
                warn!(url = %url, error = %error, "page check failed");
                PageReport::failed(url, error.to_string())
            }
        }
    }))
    .await
}

/// Saves a fetched page for offline selector debugging.
fn dump_page(dir: &Path, url: &str, html: &str) {
    let name: String = url
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let path = dir.join(format!("{name}.html"));
    if let Err(error) = std::fs::create_dir_all(dir).and_then(|()| std::fs::write(&path, html)) {
        warn!(path = %path.display(), error = %error, "failed to dump HTML");
    }
}

fn print_reports(reports: &[PageReport], cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format_reports(reports)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color).with_reasons(cli.verbose);
            println!("{}", formatter.format_reports(reports));
        }
    }
    Ok(())
}

async fn notify(reports: &[PageReport]) -> Result<()> {
    match StockEmail::render(reports) {
        Some(email) => {
            let mailer = Mailer::new(config::smtp_config()?);
            mailer.send(&email).await?;
        }
        None => info!("no variant in stock, skipping notification"),
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use restock_core::StockStatus;
    use restock_fetch::FetchError;
    use std::collections::HashMap;

    struct StaticPageSource {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl PageSource for StaticPageSource {
        async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
            self.pages.get(url).cloned().ok_or(FetchError::HttpStatus {
                status: 503,
                url: url.to_string(),
            })
        }
    }

    const PAGE: &str = r#"
        <div class="page-title"><h1>edge 40 neo</h1></div>
        <div class="device-stock-container"><table>
            <tr><th>Black</th><td class="replace-stock-color">在庫あり</td></tr>
        </table></div>"#;

    #[tokio::test]
    async fn test_failed_page_does_not_abort_batch() {
        let urls = vec![
            "https://example.com/good".to_string(),
            "https://example.com/down".to_string(),
        ];
        let source = StaticPageSource {
            pages: HashMap::from([(urls[0].clone(), PAGE.to_string())]),
        };

        let reports = check_all(&source, &urls, Precedence::TextFirst, None).await;

        assert_eq!(reports.len(), 2);
        assert!(reports[0].any_in_stock);
        assert_eq!(reports[0].details[0].status, StockStatus::InStock);
        assert!(reports[1].has_error());
        assert!(!reports[1].any_in_stock);
    }

    #[tokio::test]
    async fn test_reports_come_back_in_url_order() {
        let urls: Vec<String> = (0..5)
            .map(|i| format!("https://example.com/p{i}"))
            .collect();
        let source = StaticPageSource {
            pages: urls.iter().map(|u| (u.clone(), PAGE.to_string())).collect(),
        };

        let reports = check_all(&source, &urls, Precedence::TextFirst, None).await;
        let report_urls: Vec<&str> = reports.iter().map(|r| r.source_url.as_str()).collect();
        assert_eq!(report_urls, urls.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
