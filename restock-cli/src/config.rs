//! Environment-based configuration.
//!
//! The monitor runs unattended, so everything it needs comes from the
//! environment: the URL list to check and, when notification is enabled,
//! the SMTP settings.

use anyhow::{bail, Context, Result};
use url::Url;

use restock_notify::SmtpConfig;

/// Environment variable listing product page URLs.
///
/// Comma-separated, or newline-separated when no comma is present.
pub const PRODUCT_URLS_VAR: &str = "PRODUCT_URLS";

/// Reads and validates the configured product URLs.
pub fn product_urls() -> Result<Vec<String>> {
    let raw = std::env::var(PRODUCT_URLS_VAR).unwrap_or_default();
    let urls = split_urls(&raw);
    if urls.is_empty() {
        bail!("{PRODUCT_URLS_VAR} is not set; nothing to check");
    }
    validate_urls(&urls)?;
    Ok(urls)
}

/// Splits a raw URL list on commas, falling back to newlines.
pub fn split_urls(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else {
        raw.lines().collect()
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks that every entry parses as a URL.
pub fn validate_urls(urls: &[String]) -> Result<()> {
    for url in urls {
        Url::parse(url).with_context(|| format!("invalid product URL: {url}"))?;
    }
    Ok(())
}

/// Reads SMTP settings for notification delivery.
///
/// `SMTP_HOST` and `SMTP_PORT` have Gmail defaults; the credentials and
/// recipient are required.
pub fn smtp_config() -> Result<SmtpConfig> {
    let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
    let user = required("EMAIL_USER")?;
    let pass = required("EMAIL_PASS")?;
    let recipient = required("RECIPIENT_EMAIL")?;

    let mut config = SmtpConfig::new(host, user.clone(), pass, user, recipient);
    if let Ok(port) = std::env::var("SMTP_PORT") {
        let port: u16 = port.parse().context("SMTP_PORT must be a port number")?;
        config = config.with_port(port);
    }
    Ok(config)
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} is required for email notification"))
}

// ============================================================================
// Tests
// ============================================================================
