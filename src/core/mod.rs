//! Core business logic module
//!
//! This module contains the dashboard loading components:
//! - `traits` - Store abstractions (sync and async)
//! - `aggregator` - Record validation, totals and formatting
//! - `highlights` - Highlight card descriptions from transaction dates
//! - `sequencer` - Generation counter deciding which load may publish
//! - `session` - Synchronous load-on-activate session
//! - `async` - Asynchronous session on top of tokio

pub mod aggregator;
pub mod r#async;
pub mod highlights;
pub mod sequencer;
pub mod session;
pub mod traits;

pub use aggregator::{compute_totals, format_transaction, summarize, Aggregator, AmountPolicy};
pub use highlights::build_highlights;
pub use r#async::{AsyncDashboardSession, DashboardReceiver};
pub use sequencer::{LoadOutcome, LoadSequencer, LoadTicket};
pub use session::{load_dashboard, DashboardSession};
pub use traits::{AsyncKeyValueStore, KeyValueStore};
