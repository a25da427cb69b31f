//! Formatter tests.

use restock_core::{ClassifiedCell, PageReport, ReasonCode, StockStatus};

use super::{JsonFormatter, TextFormatter};

fn sample_report() -> PageReport {
    PageReport::from_cells(
        "motorola edge 40 neo",
        "https://example.com/device/edge-40-neo/",
        vec![
            ClassifiedCell::new("Black", StockStatus::InStock, ReasonCode::PositiveText),
            ClassifiedCell::new(
                "White",
                StockStatus::OutOfStock,
                ReasonCode::AttributeUnavailable,
            ),
        ],
    )
}

#[test]
fn test_text_plain_lists_every_variant() {
    let formatter = TextFormatter::new(false);
    let output = formatter.format_report(&sample_report());

    assert!(output.contains("motorola edge 40 neo"));
    assert!(output.contains("Black: 在庫あり"));
    assert!(output.contains("White: 在庫なし"));
    // No ANSI escapes without colors
    assert!(!output.contains("\x1b["));
}

#[test]
fn test_text_colors_are_applied() {
    let formatter = TextFormatter::new(true);
    let output = formatter.format_report(&sample_report());
    assert!(output.contains("\x1b[32m")); // green for in stock
    assert!(output.contains("\x1b[31m")); // red for out of stock
}

#[test]
fn test_text_reasons_shown_when_requested() {
    let silent = TextFormatter::new(false).format_report(&sample_report());
    assert!(!silent.contains("non-empty text"));

    let verbose = TextFormatter::new(false)
        .with_reasons(true)
        .format_report(&sample_report());
    assert!(verbose.contains("non-empty text without a negative phrase"));
    assert!(verbose.contains("data-stock-status=\"2\""));
}

#[test]
fn test_text_error_report() {
    let report = PageReport::failed("https://example.com/p", "HTTP status 503");
    let output = TextFormatter::new(false).format_report(&report);
    assert!(output.contains("HTTP status 503"));
}

#[test]
fn test_text_batch_summary() {
    let reports = vec![
        sample_report(),
        PageReport::failed("https://example.com/down", "timeout"),
    ];
    let output = TextFormatter::new(false).format_reports(&reports);
    assert!(output.contains("1 of 2 products in stock"));
}

#[test]
fn test_json_report_field_names() {
    let output = JsonFormatter::new(false)
        .format_report(&sample_report())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["productName"], "motorola edge 40 neo");
    assert_eq!(value["anyInStock"], true);
    assert_eq!(value["details"][0]["color"], "Black");
    assert_eq!(value["details"][0]["reasonCode"], "positive_text");
}

#[test]
fn test_json_batch_envelope() {
    let reports = vec![
        sample_report(),
        PageReport::failed("https://example.com/down", "timeout"),
    ];
    let output = JsonFormatter::new(true).format_reports(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["checked"], 2);
    assert_eq!(value["inStock"], 1);
    assert_eq!(value["anyInStock"], true);
    assert_eq!(value["reports"].as_array().unwrap().len(), 2);
}
