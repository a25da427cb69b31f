//! Ordered stock classification rules.
//!
//! The rule set is an explicit, named table of `(predicate, status,
//! reason)` entries evaluated top-down with first-match-wins. The two
//! observed orderings of the text rule versus the attribute rules are both
//! available as named tables, selected through [`Precedence`]; the
//! ordering is data, not control flow, so it can be pinned by tests.

use crate::models::{ClassifiedCell, RawCell, ReasonCode, StockStatus};

// ============================================================================
// Signal Constants
// ============================================================================

/// Marker phrases that read as "not purchasable" to a human.
pub const NEGATIVE_PHRASES: [&str; 2] = ["在庫なし", "入荷待ち"];

/// `data-stock-status` value the site uses for purchasable variants.
pub const ATTR_AVAILABLE: &str = "1";

/// `data-stock-status` value the site uses for sold-out variants.
pub const ATTR_UNAVAILABLE: &str = "2";

/// Icon class that decorates availability dots.
///
/// The site toggles this glyph from client-side script, so its presence
/// alone never classifies as in stock.
pub const ICON_MARKER: &str = "fa-circle";

// ============================================================================
// Rule Table
// ============================================================================

/// One entry in the ordered rule table.
pub struct Rule {
    /// The status assigned when this rule fires.
    pub status: StockStatus,
    /// The audit code reported when this rule fires.
    pub reason: ReasonCode,
    /// Whether this rule fires for the given cell.
    pub matches: fn(&RawCell) -> bool,
}

fn negative_text(cell: &RawCell) -> bool {
    NEGATIVE_PHRASES
        .iter()
        .any(|phrase| cell.text.contains(phrase))
}

fn attribute_unavailable(cell: &RawCell) -> bool {
    cell.status_attribute.as_deref() == Some(ATTR_UNAVAILABLE)
}

fn attribute_available(cell: &RawCell) -> bool {
    cell.status_attribute.as_deref() == Some(ATTR_AVAILABLE)
}

fn positive_text(cell: &RawCell) -> bool {
    !cell.text.is_empty() && !negative_text(cell)
}

fn icon_only(cell: &RawCell) -> bool {
    cell.icon_classes.iter().any(|class| class == ICON_MARKER)
}

fn always(_cell: &RawCell) -> bool {
    true
}

/// Canonical ordering: visible text outranks the structured attribute.
///
/// Text is what a human reader would see, so it is the signal of record
/// when the page's own data model disagrees with it.
pub static TEXT_FIRST_RULES: [Rule; 6] = [
    Rule {
        status: StockStatus::OutOfStock,
        reason: ReasonCode::NegativeText,
        matches: negative_text,
    },
    Rule {
        status: StockStatus::OutOfStock,
        reason: ReasonCode::AttributeUnavailable,
        matches: attribute_unavailable,
    },
    Rule {
        status: StockStatus::InStock,
        reason: ReasonCode::AttributeAvailable,
        matches: attribute_available,
    },
    Rule {
        status: StockStatus::InStock,
        reason: ReasonCode::PositiveText,
        matches: positive_text,
    },
    Rule {
        status: StockStatus::Indeterminate,
        reason: ReasonCode::IconOnly,
        matches: icon_only,
    },
    Rule {
        status: StockStatus::Unknown,
        reason: ReasonCode::NoSignal,
        matches: always,
    },
];

/// Alternative ordering: the structured attribute outranks visible text.
pub static ATTRIBUTE_FIRST_RULES: [Rule; 6] = [
    Rule {
        status: StockStatus::OutOfStock,
        reason: ReasonCode::AttributeUnavailable,
        matches: attribute_unavailable,
    },
    Rule {
        status: StockStatus::InStock,
        reason: ReasonCode::AttributeAvailable,
        matches: attribute_available,
    },
    Rule {
        status: StockStatus::OutOfStock,
        reason: ReasonCode::NegativeText,
        matches: negative_text,
    },
    Rule {
        status: StockStatus::InStock,
        reason: ReasonCode::PositiveText,
        matches: positive_text,
    },
    Rule {
        status: StockStatus::Indeterminate,
        reason: ReasonCode::IconOnly,
        matches: icon_only,
    },
    Rule {
        status: StockStatus::Unknown,
        reason: ReasonCode::NoSignal,
        matches: always,
    },
];

// ============================================================================
// Precedence
// ============================================================================

/// Which rule ordering to apply.
///
/// The two orderings only disagree when the text and the attribute
/// contradict each other (e.g. an awaiting-restock phrase next to
/// `data-stock-status="1"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// Evaluate the negative-text rule before the attribute rules.
    #[default]
    TextFirst,
    /// Evaluate the attribute rules before the text rules.
    AttributeFirst,
}

impl Precedence {
    /// Returns the rule table for this ordering.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Self::TextFirst => &TEXT_FIRST_RULES,
            Self::AttributeFirst => &ATTRIBUTE_FIRST_RULES,
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classifies a cell under the canonical text-first precedence.
pub fn classify(cell: &RawCell) -> ClassifiedCell {
    classify_with(cell, Precedence::TextFirst)
}

/// Classifies a cell under an explicit precedence.
///
/// Pure and total: no I/O, no side effects, and every cell shape maps to
/// exactly one status. The first matching rule wins; later rules are not
/// evaluated.
pub fn classify_with(cell: &RawCell, precedence: Precedence) -> ClassifiedCell {
    for rule in precedence.rules() {
        if (rule.matches)(cell) {
            return ClassifiedCell::new(cell.color_label.clone(), rule.status, rule.reason);
        }
    }
    // Both tables end in a catch-all, so this is only reachable if a table
    // loses its final rule.
    ClassifiedCell::new(
        cell.color_label.clone(),
        StockStatus::Unknown,
        ReasonCode::NoSignal,
    )
}

// ============================================================================
// Tests
// ============================================================================
