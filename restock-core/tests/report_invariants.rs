//! Integration tests for the classify-then-aggregate flow.

use restock_core::{classify, classify_with, PageReport, Precedence, RawCell, StockStatus};

#[test]
fn test_two_variant_page() {
    let cells = vec![
        RawCell::new("Black").with_text("在庫あり"),
        RawCell::new("White").with_status_attribute("2"),
    ];
    let details = cells.iter().map(classify).collect();
    let report = PageReport::from_cells("Edge 40 Neo", "https://example.com/p", details);

    assert!(report.any_in_stock);
    assert_eq!(report.details[0].color_label, "Black");
    assert_eq!(report.details[0].status, StockStatus::InStock);
    assert_eq!(report.details[1].color_label, "White");
    assert_eq!(report.details[1].status, StockStatus::OutOfStock);
    report.validate().unwrap();
}

#[test]
fn test_contradictory_signals_pin_both_precedences() {
    // The one scenario where the two observed orderings disagree.
    let cell = RawCell::new("Red")
        .with_text("入荷待ち")
        .with_status_attribute("1");

    let text_first = classify_with(&cell, Precedence::TextFirst);
    assert_eq!(text_first.status, StockStatus::OutOfStock);

    let attribute_first = classify_with(&cell, Precedence::AttributeFirst);
    assert_eq!(attribute_first.status, StockStatus::InStock);
}

#[test]
fn test_default_precedence_is_text_first() {
    let cell = RawCell::new("Red")
        .with_text("入荷待ち")
        .with_status_attribute("1");
    assert_eq!(classify(&cell), classify_with(&cell, Precedence::default()));
    assert_eq!(classify(&cell).status, StockStatus::OutOfStock);
}
