//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction buckets, stored and validated records, display projection
//! - `summary`: Highlight cards, totals, and the per-load dashboard value
//! - `error`: Error types for the dashboard

pub mod error;
pub mod summary;
pub mod transaction;

pub use error::DashboardError;
pub use summary::{
    AmountDisplay, Dashboard, DateSpan, HighlightSummary, RejectedRecord, Summary, Totals,
};
pub use transaction::{
    display_value, FormattedTransaction, RawTransactionRecord, StoredAmount, StoredRecord,
    TransactionType,
};
