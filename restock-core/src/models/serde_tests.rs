//! Serialization tests for model types.
//!
//! The report shape is consumed by external tooling, so the wire field
//! names are pinned here.

use super::*;
use crate::classify::classify;

#[test]
fn test_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&StockStatus::InStock).unwrap(),
        r#""in_stock""#
    );
    assert_eq!(
        serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
        r#""out_of_stock""#
    );
    assert_eq!(
        serde_json::to_string(&StockStatus::Indeterminate).unwrap(),
        r#""indeterminate""#
    );
}

#[test]
fn test_reason_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ReasonCode::AttributeUnavailable).unwrap(),
        r#""attribute_unavailable""#
    );
}

#[test]
fn test_classified_cell_wire_names() {
    let cell = ClassifiedCell::new("Black", StockStatus::InStock, ReasonCode::PositiveText);
    let json = serde_json::to_value(&cell).unwrap();
    assert_eq!(json["color"], "Black");
    assert_eq!(json["status"], "in_stock");
    assert_eq!(json["reasonCode"], "positive_text");
}

#[test]
fn test_report_wire_names() {
    let report = PageReport::from_cells("Edge 40", "https://example.com/p", Vec::new());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["productName"], "Edge 40");
    assert_eq!(json["sourceUrl"], "https://example.com/p");
    assert_eq!(json["anyInStock"], false);
    assert!(json["details"].as_array().unwrap().is_empty());
    assert!(json["error"].is_null());
    assert!(json["checkedAt"].is_string());
}

#[test]
fn test_report_roundtrip() {
    let cells = vec![
        classify(&RawCell::new("Black").with_text("在庫あり")),
        classify(&RawCell::new("White").with_status_attribute("2")),
    ];
    let report = PageReport::from_cells("Edge 40", "https://example.com/p", cells);
    let json = serde_json::to_string(&report).unwrap();
    let parsed: PageReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
    parsed.validate().unwrap();
}

#[test]
fn test_raw_cell_roundtrip() {
    let cell = RawCell::new("Black")
        .with_text("在庫あり")
        .with_status_attribute("1")
        .with_icon_class("fa-circle");
    let json = serde_json::to_string(&cell).unwrap();
    let parsed: RawCell = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cell);
}
