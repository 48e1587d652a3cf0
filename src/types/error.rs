//! Error types for the finances dashboard
//!
//! This module defines all error types that can occur while loading and
//! aggregating the dashboard. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Store Errors**: Store file not found, unreadable, or not valid JSON
//! - **Record Errors**: Invalid amount, date, transaction type or field, or an
//!   amount that overflows the totals, on a single record
//! - **Output Errors**: Failure writing a report
//! - **Runtime Errors**: Async runtime could not be built or a load task died

use thiserror::Error;

/// Main error type for the dashboard
///
/// Record-level variants carry the offending record's id so the caller can
/// report which entry was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Store snapshot not found at the specified path
    ///
    /// This is a fatal error that prevents the load from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the store or writing a report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The store content is not the expected JSON shape
    ///
    /// Fatal for the load: there is no way to tell which records were meant.
    #[error("Malformed store: {message}")]
    MalformedStore {
        /// Description of the problem
        message: String,
    },

    /// Amount could not be parsed as a decimal number
    ///
    /// Handled according to the configured amount policy.
    #[error("Invalid amount '{amount}' for transaction '{id}'")]
    InvalidAmount {
        /// The invalid amount text
        amount: String,
        /// Transaction ID
        id: String,
    },

    /// Date is not a year-first ISO-8601 date
    #[error("Invalid date '{date}' for transaction '{id}'")]
    InvalidDate {
        /// The invalid date text
        date: String,
        /// Transaction ID
        id: String,
    },

    /// Transaction type is neither an inflow nor an outflow literal
    #[error("Invalid transaction type '{tx_type}' for transaction '{id}'")]
    InvalidTransactionType {
        /// The invalid type string
        tx_type: String,
        /// Transaction ID
        id: String,
    },

    /// An identity field holds a JSON value that cannot be read as text
    #[error("Invalid {field} '{value}' for transaction '{id}'")]
    InvalidField {
        /// Name of the stored field
        field: String,
        /// The offending value, as compact JSON
        value: String,
        /// Transaction ID
        id: String,
    },

    /// Adding the amount would exceed the range of the running totals
    ///
    /// Handled according to the configured amount policy, like an
    /// unparseable amount.
    #[error("Amount '{amount}' for transaction '{id}' overflows the totals")]
    AmountOverflow {
        /// The amount that could not be added
        amount: String,
        /// Transaction ID
        id: String,
    },

    /// A report could not be written
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the write failure
        message: String,
    },

    /// The async runtime failed or a load task was aborted
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the runtime failure
        message: String,
    },
}

// Conversion from io::Error to DashboardError
impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to DashboardError
impl From<csv::Error> for DashboardError {
    fn from(error: csv::Error) -> Self {
        DashboardError::OutputError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to DashboardError
impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::MalformedStore {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DashboardError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        DashboardError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a MalformedStore error
    pub fn malformed_store(message: &str) -> Self {
        DashboardError::MalformedStore {
            message: message.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, id: &str) -> Self {
        DashboardError::InvalidAmount {
            amount: amount.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str, id: &str) -> Self {
        DashboardError::InvalidDate {
            date: date.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an InvalidTransactionType error
    pub fn invalid_transaction_type(tx_type: &str, id: &str) -> Self {
        DashboardError::InvalidTransactionType {
            tx_type: tx_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an InvalidField error
    pub fn invalid_field(field: &str, value: &str, id: &str) -> Self {
        DashboardError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(amount: &str, id: &str) -> Self {
        DashboardError::AmountOverflow {
            amount: amount.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an OutputError
    pub fn output_error(message: &str) -> Self {
        DashboardError::OutputError {
            message: message.to_string(),
        }
    }

    /// Create a RuntimeError
    pub fn runtime_error(message: &str) -> Self {
        DashboardError::RuntimeError {
            message: message.to_string(),
        }
    }
}
