//! Personal Finances Dashboard Library
//! # Overview
//!
//! This library turns the transaction list kept in a device key-value store
//! into a dashboard: formatted transactions, three highlight cards (income,
//! outcome, balance) and the numeric totals behind them. Loads can run
//! synchronously or on a tokio runtime.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (stored records, dashboard view model, errors)
//! - [`format`] - pt-BR currency and date formatting
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::aggregator`] - Validation, totals and transaction formatting
//!   - [`core::highlights`] - Highlight card descriptions
//!   - [`core::sequencer`] - Newest-load-wins publication
//!   - [`core::session`] - Load-on-activate sessions
//! - [`io`] - Store access and report writers
//! - [`strategy`] - Sync / async pipelines selected at runtime
//!
//! # Transaction Types
//!
//! - **Income** (inflow): adds to the balance
//! - **Outcome** (outflow): subtracts from the balance
//!
//! # Totals
//!
//! For every published dashboard `total == entries - expensive`, computed in
//! exact decimal arithmetic and only rounded when formatted for display.

// Module declarations
pub mod cli;
pub mod core;
pub mod format;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{Aggregator, AmountPolicy, AsyncDashboardSession, DashboardSession, LoadSequencer};
pub use io::{write_dashboard, JsonFileStore, MemoryStore, OutputFormat, TRANSACTIONS_KEY};
pub use types::{
    Dashboard, DashboardError, FormattedTransaction, HighlightSummary, RawTransactionRecord,
    StoredRecord, Totals, TransactionType,
};
