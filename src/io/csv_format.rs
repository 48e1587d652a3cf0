//! CSV output for the formatted transaction list
//!
//! Writes one row per formatted transaction, in dashboard order, with
//! columns: id, name, category, type, amount, date. Fields containing the
//! separator (for example `R$ 1.234,56`) are quoted by the csv writer.

use crate::types::{DashboardError, FormattedTransaction};
use csv::Writer;
use std::io::Write;

/// Write formatted transactions in CSV format
///
/// # Arguments
///
/// * `transactions` - Formatted transactions, already in display order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(DashboardError::OutputError)` if a write error occurred
pub fn write_transactions_csv(
    transactions: &[FormattedTransaction],
    output: &mut dyn Write,
) -> Result<(), DashboardError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["id", "name", "category", "type", "amount", "date"])?;

    for transaction in transactions {
        writer.write_record([
            transaction.id.as_str(),
            transaction.name.as_str(),
            transaction.category.as_str(),
            transaction.tx_type.as_str(),
            transaction.amount.as_str(),
            transaction.date.as_str(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| DashboardError::output_error(&format!("Failed to flush output: {}", e)))?;

    Ok(())
}
