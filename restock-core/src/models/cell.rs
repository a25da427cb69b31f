//! Raw stock-cell signals.

use serde::{Deserialize, Serialize};

/// Color label used when no heading cell precedes a stock cell.
pub const UNKNOWN_COLOR_LABEL: &str = "unknown";

// ============================================================================
// Raw Cell
// ============================================================================

/// The signals extracted from one stock-indicator cell, before judgment.
///
/// Every field is independently optional or empty-able. The markup this is
/// extracted from is inconsistent: a cell may carry text, a
/// `data-stock-status` attribute, an icon glyph, any combination of those,
/// or nothing at all. Classification must work for every combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCell {
    /// Text of the nearest preceding heading cell, `"unknown"` if none.
    pub color_label: String,
    /// Trimmed inner text of the cell; may be empty.
    pub text: String,
    /// Value of the structured status attribute, if the cell carries one.
    pub status_attribute: Option<String>,
    /// Class tokens of a nested icon glyph; empty if there is no icon.
    pub icon_classes: Vec<String>,
}

impl RawCell {
    /// Creates a cell with the given color label and no signals.
    pub fn new(color_label: impl Into<String>) -> Self {
        Self {
            color_label: color_label.into(),
            ..Self::default()
        }
    }

    /// Creates a cell with no color label (resolves to `"unknown"`).
    pub fn unlabeled() -> Self {
        Self::new(UNKNOWN_COLOR_LABEL)
    }

    /// Sets the inner text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the structured status attribute.
    pub fn with_status_attribute(mut self, value: impl Into<String>) -> Self {
        self.status_attribute = Some(value.into());
        self
    }

    /// Adds an icon class token.
    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_classes.push(class.into());
        self
    }

    /// Returns true if the cell carries no signal at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.status_attribute.is_none() && self.icon_classes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
