//! Transaction-related types for the finances dashboard
//!
//! This module defines the transaction buckets, the stored record shape read
//! from the device store, the validated record the aggregator works on, and
//! the display projection handed to the rendering layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Transaction buckets supported by the dashboard
///
/// Serialized with the literals the recording flow writes to the store
/// (`"Income"` / `"Outcome"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money coming in
    ///
    /// Summed into the `entries` highlight.
    #[serde(rename = "Income")]
    Inflow,

    /// Money going out
    ///
    /// Summed into the `expensive` highlight.
    #[serde(rename = "Outcome")]
    Outflow,
}

impl TransactionType {
    /// Literal used by the store and the rendering layer
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Inflow => "Income",
            TransactionType::Outflow => "Outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount as it appears in the store
///
/// The recording flow writes amounts as strings, but hand-edited snapshots
/// frequently carry plain JSON numbers. `null` and a missing field both land
/// on `Missing`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredAmount {
    Text(String),
    Number(serde_json::Number),
    #[default]
    Missing,
}

impl fmt::Display for StoredAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredAmount::Text(text) => f.write_str(text),
            StoredAmount::Number(number) => write!(f, "{}", number),
            StoredAmount::Missing => Ok(()),
        }
    }
}

/// Transaction record as persisted in the store
///
/// Every field is still unvalidated and kept as the raw JSON value, so a
/// record with a wrong field type (a numeric date, an object as a name) is
/// judged on its own instead of failing the whole store. Missing fields
/// deserialize to `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoredRecord {
    pub id: Value,
    pub name: Value,
    pub category: Value,
    #[serde(rename = "type")]
    pub tx_type: Value,
    pub amount: StoredAmount,
    pub date: Value,
}

impl StoredRecord {
    /// Build a record from string fields, the shape the recording flow writes
    pub fn from_text(
        id: &str,
        name: &str,
        category: &str,
        tx_type: &str,
        amount: StoredAmount,
        date: &str,
    ) -> Self {
        Self {
            id: Value::from(id),
            name: Value::from(name),
            category: Value::from(category),
            tx_type: Value::from(tx_type),
            amount,
            date: Value::from(date),
        }
    }

    /// Id used when reporting this record, whatever its JSON type
    pub fn display_id(&self) -> String {
        display_value(&self.id)
    }
}

/// Text of a stored field for messages: strings verbatim, `null` as empty,
/// anything else as compact JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Validated transaction record
///
/// Immutable once read. The aggregator never mutates these; every load
/// rebuilds the whole view from them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransactionRecord {
    /// Opaque unique identifier
    pub id: String,

    /// Free-text label entered by the user
    pub name: String,

    /// Category key chosen when the transaction was recorded
    pub category: String,

    /// Bucket this transaction belongs to
    pub tx_type: TransactionType,

    /// Non-negative magnitude; the bucket carries the sign
    pub amount: Decimal,

    /// Calendar date of the transaction
    pub date: NaiveDate,
}

impl RawTransactionRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        tx_type: TransactionType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            tx_type,
            amount,
            date,
        }
    }
}

/// Display-ready projection of a [`RawTransactionRecord`]
///
/// Identity fields are copied verbatim; `amount` and `date` are rendered
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTransaction {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// Localized currency string (`R$ 1.234,56`)
    pub amount: String,
    /// Short date (`DD/MM/YYYY`)
    pub date: String,
}
