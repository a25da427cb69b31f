//! CSS selectors for product-page markup.
//!
//! This file contains all selectors used to locate stock information.
//! Update this file when the source site changes its HTML structure.
//!
//! **Update process**: when scanning starts reporting missing containers
//! for pages that visibly carry a stock table, capture the HTML (the CLI's
//! `--dump-html` flag), adjust the selectors, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Stock-information container; its absence means "no stock table".
pub static STOCK_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".device-stock-container").unwrap());

/// One stock-indicator cell per color variant, inside the container.
pub static STOCK_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".replace-stock-color").unwrap());

/// Product title heading.
pub static PRODUCT_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".page-title h1").unwrap());

/// Icon glyph nested in a stock cell.
pub static ICON: LazyLock<Selector> = LazyLock::new(|| Selector::parse("i").unwrap());

/// Attribute carrying the machine-readable availability flag.
pub static STOCK_STATUS_ATTR: &str = "data-stock-status";

/// Tag name of the heading cells that label each color row.
pub static HEADING_TAG: &str = "th";
