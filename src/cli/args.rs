use crate::core::aggregator::AmountPolicy;
use crate::io::report::OutputFormat;
use crate::io::store::TRANSACTIONS_KEY;
use crate::strategy::DashboardConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Summarize a personal finances store as a dashboard
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Summarize a personal finances store as a dashboard", long_about = None)]
pub struct CliArgs {
    /// JSON snapshot of the device key-value store
    #[arg(value_name = "INPUT", help = "Path to the JSON store snapshot")]
    pub input_file: PathBuf,

    /// Loading strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Loading strategy: 'sync' or 'async' (tokio runtime)"
    )]
    pub strategy: StrategyType,

    /// Report format
    #[arg(long = "format", value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Policy for records whose amount cannot be parsed
    #[arg(
        long = "on-invalid",
        value_name = "POLICY",
        default_value = "skip",
        help = "Invalid amounts: 'skip' the record, count it as 'zero', or 'fail' the load"
    )]
    pub on_invalid: AmountPolicy,

    /// Store key holding the transaction list
    #[arg(long = "key", value_name = "KEY", default_value = TRANSACTIONS_KEY)]
    pub key: String,
}

/// Available loading strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Build the strategy configuration from the parsed arguments
    ///
    /// An empty `--key` falls back to the default key with a warning.
    pub fn to_config(&self) -> DashboardConfig {
        DashboardConfig::new(self.on_invalid, self.format, self.key.as_str())
    }
}
