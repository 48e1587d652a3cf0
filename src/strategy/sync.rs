//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It wires a
//! [`JsonFileStore`] into a [`DashboardSession`], runs one activation and
//! writes the published dashboard.

use crate::core::aggregator::Aggregator;
use crate::core::session::DashboardSession;
use crate::io::report::write_dashboard;
use crate::io::store::JsonFileStore;
use crate::strategy::{DashboardConfig, ProcessingStrategy};
use crate::types::DashboardError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use finances_dashboard::strategy::{DashboardConfig, ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(DashboardConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("store.json"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncProcessingStrategy {
    config: DashboardConfig,
}

impl SyncProcessingStrategy {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), DashboardError> {
        let session = DashboardSession::new(
            JsonFileStore::new(input_path),
            Aggregator::new(self.config.amount_policy),
            self.config.storage_key.as_str(),
        );

        session.activate()?;

        let dashboard = session
            .current()
            .ok_or_else(|| DashboardError::runtime_error("no dashboard was published"))?;

        write_dashboard(&dashboard, self.config.output_format, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::AmountPolicy;
    use crate::io::report::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary store snapshot for testing
    fn create_temp_store(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const STORE: &str = r#"{
        "@gofinances:transactions": "[{\"id\":\"1\",\"name\":\"Salary\",\"category\":\"salary\",\"type\":\"Income\",\"amount\":\"500\",\"date\":\"2020-05-01\"},{\"id\":\"2\",\"name\":\"Rent\",\"category\":\"house\",\"type\":\"Outcome\",\"amount\":\"abc\",\"date\":\"2020-05-10\"}]"
    }"#;

    fn config(policy: AmountPolicy, format: OutputFormat) -> DashboardConfig {
        DashboardConfig::new(policy, format, crate::io::store::TRANSACTIONS_KEY)
    }

    #[test]
    fn test_sync_strategy_writes_text_report() {
        let file = create_temp_store(STORE);
        let strategy = SyncProcessingStrategy::new(config(AmountPolicy::Skip, OutputFormat::Text));
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.starts_with("Receipts: R$\u{a0}500,00 | Last entry was May 1th\n"));
        assert!(output_str.contains("Outflows: R$\u{a0}0,00\n"));
        assert!(!output_str.contains("Rent"));
    }

    #[test]
    fn test_sync_strategy_zero_policy_keeps_record() {
        let file = create_temp_store(STORE);
        let strategy = SyncProcessingStrategy::new(config(AmountPolicy::Zero, OutputFormat::Csv));
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("2,Rent,house,Outcome,\"R$\u{a0}0,00\",10/05/2020"));
    }

    #[test]
    fn test_sync_strategy_fail_policy_returns_error() {
        let file = create_temp_store(STORE);
        let strategy = SyncProcessingStrategy::new(config(AmountPolicy::Fail, OutputFormat::Text));
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);

        assert_eq!(result, Err(DashboardError::invalid_amount("abc", "2")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncProcessingStrategy::default();
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.json"), &mut output);
        assert!(matches!(result, Err(DashboardError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
