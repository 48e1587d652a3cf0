//! Asynchronous processing strategy
//!
//! Runs the load on a tokio multi-threaded runtime through an
//! [`AsyncDashboardSession`]: the store file is read with `tokio::fs` and the
//! aggregation happens on a spawned task. The report is written on the
//! calling thread once the load has been published.
//!
//! The runtime is created per call to `process`, so the strategy can be used
//! from plain synchronous code such as `main`.

use crate::core::aggregator::Aggregator;
use crate::core::r#async::AsyncDashboardSession;
use crate::core::sequencer::LoadOutcome;
use crate::io::report::write_dashboard;
use crate::io::store::JsonFileStore;
use crate::strategy::{DashboardConfig, ProcessingStrategy};
use crate::types::DashboardError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Number of runtime worker threads; a single load needs very little
const WORKER_THREADS: usize = 2;

/// Asynchronous processing strategy
#[derive(Debug, Clone, Default)]
pub struct AsyncProcessingStrategy {
    config: DashboardConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the given configuration
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Load the dashboard on a tokio runtime and write the report
    ///
    /// # Error Handling
    ///
    /// Runtime creation and task failures are reported as
    /// `DashboardError::RuntimeError`; everything else is the same as the
    /// synchronous strategy.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), DashboardError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(WORKER_THREADS)
            .enable_all()
            .build()
            .map_err(|e| DashboardError::runtime_error(&format!("Failed to create tokio runtime: {}", e)))?;

        let dashboard = runtime.block_on(async {
            let session = AsyncDashboardSession::new(
                Arc::new(JsonFileStore::new(input_path)),
                Aggregator::new(self.config.amount_policy),
                self.config.storage_key.as_str(),
            );

            match session.activate_and_wait().await? {
                LoadOutcome::Published { .. } => session
                    .current()
                    .ok_or_else(|| DashboardError::runtime_error("no dashboard was published")),
                LoadOutcome::Stale { generation } => Err(DashboardError::runtime_error(&format!(
                    "load {} was superseded",
                    generation
                ))),
            }
        })?;

        write_dashboard(&dashboard, self.config.output_format, output)
    }
}
