//! Processing strategy module for dashboard loading
//!
//! This module defines the Strategy pattern for the complete load pipeline:
//! reading the store snapshot, aggregating it into a dashboard and writing a
//! report. Synchronous and asynchronous implementations can be selected at
//! runtime and produce identical output for the same input.

use crate::cli::StrategyType;
use crate::core::aggregator::AmountPolicy;
use crate::io::report::OutputFormat;
use crate::io::store::TRANSACTIONS_KEY;
use crate::types::DashboardError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncProcessingStrategy;
pub use sync::SyncProcessingStrategy;

/// Configuration shared by every processing strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// What to do with records whose amount cannot be parsed
    pub amount_policy: AmountPolicy,
    /// Report format written to the output
    pub output_format: OutputFormat,
    /// Store key holding the transaction list
    pub storage_key: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            amount_policy: AmountPolicy::default(),
            output_format: OutputFormat::default(),
            storage_key: TRANSACTIONS_KEY.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Create a new DashboardConfig
    ///
    /// An empty or blank storage key falls back to the default key, with a
    /// warning.
    pub fn new(amount_policy: AmountPolicy, output_format: OutputFormat, storage_key: impl Into<String>) -> Self {
        let mut storage_key = storage_key.into();
        if storage_key.trim().is_empty() {
            tracing::warn!(default = TRANSACTIONS_KEY, "empty storage key, using default");
            storage_key = TRANSACTIONS_KEY.to_string();
        }

        Self {
            amount_policy,
            output_format,
            storage_key,
        }
    }
}

/// Processing strategy trait for complete dashboard pipelines
///
/// Each strategy reads the store snapshot at `input_path`, runs one load
/// through a dashboard session and writes the resulting report.
pub trait ProcessingStrategy: Send + Sync {
    /// Load the dashboard from the input file and write the report to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the JSON store snapshot
    /// * `output` - Mutable reference to a writer for the report
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store file cannot be found or read
    /// - The snapshot or the stored transaction list is malformed
    /// - A record is invalid and the amount policy is `Fail`
    /// - The report cannot be written
    ///
    /// Invalid records under the `Skip` and `Zero` policies are logged and
    /// listed in the dashboard's `rejected` field instead.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), DashboardError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Configuration shared by both strategies
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(strategy_type: StrategyType, config: DashboardConfig) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(config)),
        StrategyType::Async => Box::new(AsyncProcessingStrategy::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::custom_key("custom", "custom")]
    #[case::empty_key("", TRANSACTIONS_KEY)]
    #[case::blank_key("   ", TRANSACTIONS_KEY)]
    fn test_config_storage_key(#[case] key: &str, #[case] expected: &str) {
        let config = DashboardConfig::new(AmountPolicy::Skip, OutputFormat::Text, key);
        assert_eq!(config.storage_key, expected);
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.amount_policy, AmountPolicy::Skip);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.storage_key, TRANSACTIONS_KEY);
    }
}
