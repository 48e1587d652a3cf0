//! Asynchronous implementations of core components
//!
//! - **AsyncDashboardSession**: overlapping loads as tokio tasks, with the
//!   newest result winning and every accepted dashboard pushed through a
//!   `tokio::sync::watch` channel

pub mod session;

pub use session::{AsyncDashboardSession, DashboardReceiver};
