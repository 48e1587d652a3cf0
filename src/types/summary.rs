//! Summary types produced by one aggregation pass
//!
//! All of these are ephemeral view models: they are rebuilt from scratch on
//! every load and never persisted.

use super::transaction::FormattedTransaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One highlight card: a formatted amount and its date-range description
///
/// `last_transaction` is empty when no record contributed to the highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountDisplay {
    pub amount: String,
    pub last_transaction: String,
}

/// The three highlight cards shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSummary {
    /// Sum of all inflows
    pub entries: AmountDisplay,
    /// Sum of all outflows
    pub expensive: AmountDisplay,
    /// Entries minus outflows
    pub total: AmountDisplay,
}

/// Numeric sums behind the highlight cards
///
/// The formatted strings in [`HighlightSummary`] are derived from these;
/// `total == entries - expensive` always holds here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub entries: Decimal,
    pub expensive: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Zero sums, used for an empty store
    pub fn zero() -> Self {
        Totals {
            entries: Decimal::ZERO,
            expensive: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Earliest and latest dates over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

/// A stored record that did not make it into the totals unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// Identifier of the stored record (may be empty if the store omitted it)
    pub id: String,
    /// Human-readable reason, taken from the validation error
    pub reason: String,
}

/// Result of the pure aggregation over validated records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub transactions: Vec<FormattedTransaction>,
    pub highlights: HighlightSummary,
    pub totals: Totals,
}

/// Immutable result of one completed dashboard load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub transactions: Vec<FormattedTransaction>,
    pub highlights: HighlightSummary,
    pub totals: Totals,
    pub rejected: Vec<RejectedRecord>,
}

impl Dashboard {
    pub fn from_summary(summary: Summary, rejected: Vec<RejectedRecord>) -> Self {
        Dashboard {
            transactions: summary.transactions,
            highlights: summary.highlights,
            totals: summary.totals,
            rejected,
        }
    }
}
