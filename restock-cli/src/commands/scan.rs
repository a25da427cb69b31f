//! Scan command - classify a saved page without fetching.
//!
//! Useful for checking a page dumped with `check --dump-html`, or for
//! trying selector changes against captured markup.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use restock_scrape::scan_page_with;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// HTML file to scan; reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Source URL to record in the report.
    #[arg(long, default_value = "file://local")]
    pub url: String,
}

/// Runs the scan command.
pub fn run(args: &ScanArgs, cli: &Cli) -> Result<()> {
    let html = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let report = scan_page_with(&html, &args.url, cli.precedence());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format_report(&report)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color).with_reasons(cli.verbose);
            println!("{}", formatter.format_report(&report));
        }
    }

    Ok(())
}
