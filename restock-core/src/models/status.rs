//! Availability states and reason codes.
//!
//! This module contains the judgment side of the data model:
//! - [`StockStatus`] - the four-state availability judgment
//! - [`ReasonCode`] - which rule produced the judgment (for audit)

use serde::{Deserialize, Serialize};

// ============================================================================
// Stock Status
// ============================================================================

/// Availability judgment for a single color variant.
///
/// Every extracted cell maps to exactly one of these states; there is no
/// partial outcome. `Indeterminate` is deliberately distinct from
/// `Unknown`: it means an icon-only signal was present but is not trusted
/// without textual confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// The variant can be purchased.
    InStock,
    /// The variant is sold out or awaiting restock.
    OutOfStock,
    /// Icon-only signal; needs manual confirmation.
    Indeterminate,
    /// No recognized signal.
    #[default]
    Unknown,
}

impl StockStatus {
    /// Returns the human-readable label, as shown on the source page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "在庫あり",
            Self::OutOfStock => "在庫なし",
            Self::Indeterminate => "判断不能（要確認）",
            Self::Unknown => "状態不明",
        }
    }

    /// Returns an emoji for the status.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::InStock => "🟢",
            Self::OutOfStock => "🔴",
            Self::Indeterminate => "🟡",
            Self::Unknown => "⚪",
        }
    }

    /// Returns true if the variant can actually be bought.
    ///
    /// Only `InStock` qualifies; `Indeterminate` never does, because an
    /// icon toggled by client-side script is not evidence of stock.
    pub fn is_purchasable(&self) -> bool {
        *self == Self::InStock
    }

    /// Returns all states.
    pub fn all() -> &'static [StockStatus] {
        &[
            Self::InStock,
            Self::OutOfStock,
            Self::Indeterminate,
            Self::Unknown,
        ]
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

// ============================================================================
// Reason Code
// ============================================================================

/// Identifies which classification rule produced a status.
///
/// Reason codes make every judgment auditable: when the source page's
/// markup changes and classifications start drifting, the reason codes in
/// the reports show which rule fired for each cell. Human-readable
/// narration is derived from the code by presentation layers, never
/// interleaved into the decision function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Text contains an out-of-stock or awaiting-restock phrase.
    NegativeText,
    /// Structured attribute says explicitly unavailable.
    AttributeUnavailable,
    /// Structured attribute says explicitly available.
    AttributeAvailable,
    /// Non-empty text without a negative phrase.
    PositiveText,
    /// Only an icon glyph was found; insufficient on its own.
    IconOnly,
    /// No rule matched any signal.
    NoSignal,
}

impl ReasonCode {
    /// Returns the judgment-basis narration for this code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NegativeText => "text contains an out-of-stock or awaiting-restock phrase",
            Self::AttributeUnavailable => "data-stock-status=\"2\" (unavailable)",
            Self::AttributeAvailable => "data-stock-status=\"1\" (available)",
            Self::PositiveText => "non-empty text without a negative phrase",
            Self::IconOnly => "icon-only signal, unconfirmed",
            Self::NoSignal => "no recognized signal",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Tests
// ============================================================================
