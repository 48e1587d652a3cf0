//! I/O module
//!
//! Handles reading the device store and writing reports.
//!
//! # Components
//!
//! - `json_format` - Stored record decoding and field parsers
//! - `store` - Key-value store implementations (in-memory, JSON snapshot file)
//! - `csv_format` - CSV output of the formatted transaction list
//! - `report` - Text / JSON / CSV dashboard reports

pub mod csv_format;
pub mod json_format;
pub mod report;
pub mod store;

pub use csv_format::write_transactions_csv;
pub use json_format::{
    parse_amount, parse_date, parse_stored_transactions, parse_text_field, parse_transaction_type,
};
pub use report::{write_dashboard, write_dashboard_json, write_dashboard_text, OutputFormat};
pub use store::{JsonFileStore, MemoryStore, TRANSACTIONS_KEY};
