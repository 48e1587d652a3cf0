//! Personal Finances Dashboard CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run -- store.json
//! cargo run -- --strategy async --format json store.json > dashboard.json
//! cargo run -- --on-invalid zero --format csv store.json > transactions.csv
//! RUST_LOG=debug cargo run -- store.json
//! ```
//!
//! The input is a JSON object snapshot of the device store. The value under
//! `--key` (default `@gofinances:transactions`) holds the transaction list.
//! The report goes to stdout; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed store, invalid record under `--on-invalid fail`, etc.)

use finances_dashboard::cli;
use finances_dashboard::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Create the processing strategy selected on the command line
    let strategy = strategy::create_strategy(args.strategy, args.to_config());

    // Load the dashboard and write the report to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
