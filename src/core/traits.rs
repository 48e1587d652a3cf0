//! Core traits for reading the device store
//!
//! This module defines the trait abstractions that allow both synchronous and
//! asynchronous store implementations to feed the dashboard sessions.

use crate::types::DashboardError;
use futures::future::BoxFuture;

/// Read-only access to a key-value store
///
/// The dashboard never writes; recording transactions belongs to another flow.
pub trait KeyValueStore {
    /// Get the raw value stored under `key`, or `None` if nothing is stored
    fn get_item(&self, key: &str) -> Result<Option<String>, DashboardError>;
}

/// Read-only access to a key-value store from async code
///
/// The returned future owns everything it needs, so it can be created on
/// the calling thread and awaited inside a spawned task.
pub trait AsyncKeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`, or `None` if nothing is stored
    fn get_item(&self, key: &str) -> BoxFuture<'static, Result<Option<String>, DashboardError>>;
}
