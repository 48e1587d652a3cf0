//! Dashboard reports
//!
//! Stand-ins for the rendering layer: a plain-text screen dump, the JSON view
//! model, and the CSV transaction list. All writers take `&mut dyn Write` so
//! the CLI can target stdout and tests can target a `Vec<u8>`.

use crate::io::csv_format::write_transactions_csv;
use crate::types::{AmountDisplay, Dashboard, DashboardError};
use clap::ValueEnum;
use std::io::Write;

/// Report formats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Highlight cards followed by the transaction listing
    #[default]
    Text,
    /// The whole dashboard as pretty-printed JSON
    Json,
    /// Only the formatted transaction list, as CSV
    Csv,
}

/// Write the dashboard in the requested format
pub fn write_dashboard(
    dashboard: &Dashboard,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), DashboardError> {
    match format {
        OutputFormat::Text => write_dashboard_text(dashboard, output),
        OutputFormat::Json => write_dashboard_json(dashboard, output),
        OutputFormat::Csv => write_transactions_csv(&dashboard.transactions, output),
    }
}

/// Plain-text screen dump
///
/// ```text
/// Receipts: R$ 500,00 | Last entry was May 1th
/// Outflows: R$ 200,00 | Last out was May 10th
/// Total: R$ 300,00 | May from 1th to 10th
///
/// Listing
/// Salary | salary | Income | R$ 500,00 | 01/05/2020
/// ```
pub fn write_dashboard_text(dashboard: &Dashboard, output: &mut dyn Write) -> Result<(), DashboardError> {
    let highlights = &dashboard.highlights;
    write_card(output, "Receipts", &highlights.entries)?;
    write_card(output, "Outflows", &highlights.expensive)?;
    write_card(output, "Total", &highlights.total)?;

    if !dashboard.transactions.is_empty() {
        writeln!(output)?;
        writeln!(output, "Listing")?;
        for transaction in &dashboard.transactions {
            writeln!(
                output,
                "{} | {} | {} | {} | {}",
                transaction.name,
                transaction.category,
                transaction.tx_type,
                transaction.amount,
                transaction.date
            )?;
        }
    }

    output.flush()?;
    Ok(())
}

fn write_card(output: &mut dyn Write, title: &str, card: &AmountDisplay) -> Result<(), DashboardError> {
    if card.last_transaction.is_empty() {
        writeln!(output, "{}: {}", title, card.amount)?;
    } else {
        writeln!(output, "{}: {} | {}", title, card.amount, card.last_transaction)?;
    }
    Ok(())
}

/// Pretty-printed JSON view model, newline terminated
pub fn write_dashboard_json(dashboard: &Dashboard, output: &mut dyn Write) -> Result<(), DashboardError> {
    serde_json::to_writer_pretty(&mut *output, dashboard)
        .map_err(|e| DashboardError::output_error(&e.to_string()))?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
