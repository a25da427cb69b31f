// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Restock CLI - product stock monitoring from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Check the URLs listed in $PRODUCT_URLS once
//! restock
//!
//! # Check a single page
//! restock check --url https://example.com/device/edge-40-neo/
//!
//! # JSON output
//! restock --format json --pretty
//!
//! # Email when something is purchasable
//! restock check --notify
//!
//! # Keep checking every 5 minutes
//! restock watch --interval 300 --notify
//!
//! # Classify a saved page without fetching
//! restock scan latest.html
//! ```

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use restock_core::Precedence;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, scan, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// Restock CLI - per-color stock availability monitoring.
#[derive(Parser)]
#[command(name = "restock")]
#[command(about = "Product stock monitoring CLI")]
#[command(long_about = r#"
Restock checks retail product pages and reports which color variants are
purchasable.

Examples:
  restock                        # Check $PRODUCT_URLS once
  restock check --url <URL>      # Check one page
  restock --format json          # JSON output
  restock watch --interval 300   # Keep checking
  restock scan page.html         # Classify a saved page
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'check' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Rule ordering when text and attribute signals contradict.
    #[arg(long, default_value = "text-first", global = true)]
    pub precedence: PrecedenceArg,

    /// Verbose output (debug logs, judgment basis per variant).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Returns the classification precedence to use.
    pub fn precedence(&self) -> Precedence {
        self.precedence.into()
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check the configured product pages once (default).
    #[command(visible_alias = "c")]
    Check(check::CheckArgs),

    /// Keep checking on an interval.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),

    /// Classify a local HTML file or stdin without fetching.
    #[command(visible_alias = "s")]
    Scan(scan::ScanArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// Rule-precedence options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PrecedenceArg {
    /// Visible text outranks the structured attribute.
    #[default]
    TextFirst,
    /// The structured attribute outranks visible text.
    AttributeFirst,
}

impl From<PrecedenceArg> for Precedence {
    fn from(arg: PrecedenceArg) -> Self {
        match arg {
            PrecedenceArg::TextFirst => Precedence::TextFirst,
            PrecedenceArg::AttributeFirst => Precedence::AttributeFirst,
        }
    }
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Missing or invalid configuration.
    ConfigMissing = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Check(args)) => check::run(args, &cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        Some(Commands::Scan(args)) => scan::run(args, &cli),
        None => {
            // Default to check command
            check::run(&check::CheckArgs::default(), &cli).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
