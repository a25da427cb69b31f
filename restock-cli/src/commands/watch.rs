//! Watch command - periodic stock monitoring.

use std::collections::HashMap;
use std::io::{stdout, Write};

use anyhow::Result;
use clap::Args;
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use restock_core::PageReport;
use restock_fetch::HttpPageSource;
use restock_notify::{Mailer, StockEmail};

use crate::commands::check::check_all;
use crate::config;
use crate::output::TextFormatter;
use crate::Cli;

/// Arguments for watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds.
    #[arg(long, short, default_value = "300")]
    pub interval: u64,

    /// Minimum interval to use.
    #[arg(long, default_value = "60")]
    pub min_interval: u64,

    /// Email when a product comes back in stock.
    #[arg(long)]
    pub notify: bool,
}

/// Remembers which pages were already in stock, so a notification fires
/// only on the transition into stock, not on every refresh.
#[derive(Default)]
pub struct StockTracker {
    last_in_stock: HashMap<String, bool>,
}

impl StockTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reports that newly came into stock, updating state.
    pub fn newly_in_stock<'a>(&mut self, reports: &'a [PageReport]) -> Vec<&'a PageReport> {
        let mut fresh = Vec::new();
        for report in reports {
            let was = self
                .last_in_stock
                .get(&report.source_url)
                .copied()
                .unwrap_or(false);
            if report.any_in_stock && !was {
                fresh.push(report);
            }
            self.last_in_stock
                .insert(report.source_url.clone(), report.any_in_stock);
        }
        fresh
    }
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let refresh_interval = args.interval.max(args.min_interval);
    let urls = config::product_urls()?;

    // Fail on missing SMTP settings before the first tick, not mid-watch.
    let mailer = if args.notify {
        Some(Mailer::new(config::smtp_config()?))
    } else {
        None
    };

    info!(
        interval = refresh_interval,
        count = urls.len(),
        "starting watch mode"
    );

    let source = HttpPageSource::new();
    let formatter = TextFormatter::new(!cli.no_color).with_reasons(cli.verbose);
    let mut tracker = StockTracker::new();
    let mut ticker = interval(Duration::from_secs(refresh_interval));

    loop {
        ticker.tick().await;

        let reports = check_all(&source, &urls, cli.precedence(), None).await;

        // Clear screen
        print!("\x1b[2J\x1b[H");
        stdout().flush()?;

        let now = chrono::Local::now();
        println!(
            "Restock Watch - {} (refresh: {}s)",
            now.format("%H:%M:%S"),
            refresh_interval
        );
        println!("{}", "─".repeat(50));
        println!();
        println!("{}", formatter.format_reports(&reports));
        println!();
        println!("Press Ctrl+C to exit");

        let fresh: Vec<PageReport> = tracker
            .newly_in_stock(&reports)
            .into_iter()
            .cloned()
            .collect();

        if let Some(mailer) = &mailer {
            if let Some(email) = StockEmail::render(&fresh) {
                // A failed send must not stop the watch; try again on the
                // next transition.
                if let Err(error) = mailer.send(&email).await {
                    warn!(error = %error, "notification failed");
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::{ClassifiedCell, ReasonCode, StockStatus};

    fn report(url: &str, in_stock: bool) -> PageReport {
        let status = if in_stock {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        };
        let reason = if in_stock {
            ReasonCode::PositiveText
        } else {
            ReasonCode::NegativeText
        };
        PageReport::from_cells(
            "product",
            url,
            vec![ClassifiedCell::new("Black", status, reason)],
        )
    }

    #[test]
    fn test_notifies_only_on_transition() {
        let mut tracker = StockTracker::new();
        let url = "https://example.com/p";

        // Out of stock: nothing to notify
        assert!(tracker.newly_in_stock(&[report(url, false)]).is_empty());

        // Comes into stock: notify once
        assert_eq!(tracker.newly_in_stock(&[report(url, true)]).len(), 1);

        // Still in stock: no duplicate
        assert!(tracker.newly_in_stock(&[report(url, true)]).is_empty());
    }

    #[test]
    fn test_renotifies_after_going_out_of_stock() {
        let mut tracker = StockTracker::new();
        let url = "https://example.com/p";

        assert_eq!(tracker.newly_in_stock(&[report(url, true)]).len(), 1);
        assert!(tracker.newly_in_stock(&[report(url, false)]).is_empty());
        assert_eq!(tracker.newly_in_stock(&[report(url, true)]).len(), 1);
    }

    #[test]
    fn test_tracks_pages_independently() {
        let mut tracker = StockTracker::new();
        let reports = [
            report("https://example.com/a", true),
            report("https://example.com/b", true),
        ];

        let fresh = tracker.newly_in_stock(&reports);
        assert_eq!(fresh.len(), 2);
    }
}
