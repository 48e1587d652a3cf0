//! Asynchronous dashboard session
//!
//! This module provides `AsyncDashboardSession`, the async counterpart of
//! `DashboardSession`. Activations run as tokio tasks and may overlap; the
//! shared [`LoadSequencer`] makes sure a slow, older load never replaces the
//! result of a newer one.
//!
//! # Architecture
//!
//! ```text
//! AsyncDashboardSession
//!     ├── Arc<S: AsyncKeyValueStore>   (store read, started on activate)
//!     ├── Aggregator                   (copied into each task)
//!     ├── Arc<LoadSequencer>           (generation counter + published slot)
//!     └── watch::Sender                (pushes each accepted dashboard)
//! ```
//!
//! The ticket is taken and the store's read future is created on the calling
//! thread, so generations follow activation order. When the read actually
//! runs is up to the store: `JsonFileStore` reads lazily once the task is
//! polled. Tasks may finish in any order; the sequencer decides which result
//! is kept.

use crate::core::aggregator::Aggregator;
use crate::core::sequencer::{LoadOutcome, LoadSequencer};
use crate::core::session::load_dashboard;
use crate::core::traits::AsyncKeyValueStore;
use crate::types::{Dashboard, DashboardError};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Receiver side of the dashboard updates channel
pub type DashboardReceiver = watch::Receiver<Option<Arc<Dashboard>>>;

/// Dashboard session over an asynchronous store
pub struct AsyncDashboardSession<S> {
    store: Arc<S>,
    aggregator: Aggregator,
    key: String,
    sequencer: Arc<LoadSequencer>,
    sender: Arc<watch::Sender<Option<Arc<Dashboard>>>>,
}

impl<S: AsyncKeyValueStore> AsyncDashboardSession<S> {
    /// Create a new AsyncDashboardSession
    ///
    /// # Arguments
    ///
    /// * `store` - Shared store to read transactions from
    /// * `aggregator` - Aggregator carrying the amount policy
    /// * `key` - Store key holding the transaction list
    pub fn new(store: Arc<S>, aggregator: Aggregator, key: impl Into<String>) -> Self {
        let (sender, _receiver) = watch::channel(None);

        AsyncDashboardSession {
            store,
            aggregator,
            key: key.into(),
            sequencer: Arc::new(LoadSequencer::new()),
            sender: Arc::new(sender),
        }
    }

    /// Subscribe to published dashboards
    pub fn subscribe(&self) -> DashboardReceiver {
        self.sender.subscribe()
    }

    /// Latest published dashboard, if any load has completed
    pub fn current(&self) -> Option<Arc<Dashboard>> {
        self.sequencer.current()
    }

    /// Start one load in the background
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// resolves to whether the load was published or dropped as stale.
    pub fn activate(&self) -> JoinHandle<Result<LoadOutcome, DashboardError>> {
        let ticket = self.sequencer.begin();
        let read = self.store.get_item(&self.key);
        let aggregator = self.aggregator;
        let sequencer = Arc::clone(&self.sequencer);
        let sender = Arc::clone(&self.sender);

        tracing::debug!(generation = ticket.generation(), "dashboard load started");

        tokio::spawn(async move {
            let raw = read.await?;
            let dashboard = load_dashboard(raw.as_deref(), &aggregator)?;

            Ok(sequencer.publish_with(ticket, dashboard, |published| {
                sender.send_replace(Some(Arc::clone(published)));
            }))
        })
    }

    /// Start one load and wait for it to finish
    pub async fn activate_and_wait(&self) -> Result<LoadOutcome, DashboardError> {
        self.activate()
            .await
            .map_err(|e| DashboardError::runtime_error(&format!("dashboard load task failed: {}", e)))?
    }
}
