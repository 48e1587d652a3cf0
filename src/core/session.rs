//! Synchronous dashboard session
//!
//! A session ties a store, an aggregator and a [`LoadSequencer`] together.
//! Each call to [`DashboardSession::activate`] is one "screen became active"
//! event: read the store, aggregate, publish.

use crate::core::aggregator::Aggregator;
use crate::core::sequencer::{LoadOutcome, LoadSequencer};
use crate::core::traits::KeyValueStore;
use crate::io::json_format::parse_stored_transactions;
use crate::types::{Dashboard, DashboardError};
use std::sync::Arc;

/// Decode a raw store value and aggregate it
///
/// Shared by the sync and async sessions so both apply identical rules.
pub fn load_dashboard(raw: Option<&str>, aggregator: &Aggregator) -> Result<Dashboard, DashboardError> {
    let stored = parse_stored_transactions(raw)?;
    aggregator.aggregate(stored)
}

/// Dashboard session over a synchronous store
pub struct DashboardSession<S> {
    store: S,
    aggregator: Aggregator,
    key: String,
    sequencer: LoadSequencer,
}

impl<S: KeyValueStore> DashboardSession<S> {
    /// Create a new DashboardSession
    ///
    /// # Arguments
    ///
    /// * `store` - Store to read transactions from
    /// * `aggregator` - Aggregator carrying the amount policy
    /// * `key` - Store key holding the transaction list
    pub fn new(store: S, aggregator: Aggregator, key: impl Into<String>) -> Self {
        DashboardSession {
            store,
            aggregator,
            key: key.into(),
            sequencer: LoadSequencer::new(),
        }
    }

    /// Run one load and publish its result
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, its value is malformed,
    /// or the amount policy is `Fail` and a record is invalid. The previously
    /// published dashboard stays current in that case.
    pub fn activate(&self) -> Result<LoadOutcome, DashboardError> {
        let ticket = self.sequencer.begin();
        let raw = self.store.get_item(&self.key)?;
        let dashboard = load_dashboard(raw.as_deref(), &self.aggregator)?;
        Ok(self.sequencer.publish(ticket, dashboard))
    }

    /// Latest published dashboard, if any load has completed
    pub fn current(&self) -> Option<Arc<Dashboard>> {
        self.sequencer.current()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
