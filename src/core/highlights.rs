//! Highlight cards and their date-range descriptions
//!
//! The three cards are built from the numeric [`Totals`] and the dates of the
//! records behind them:
//!
//! - **entries**: `Last entry was <Mon> <day>th` (latest inflow)
//! - **expensive**: `Last out was <Mon> <day>th` (latest outflow)
//! - **total**: `<Mon> from <first>th to <last>th` (whole span, month of the latest date)
//!
//! A card with no contributing record gets an empty description. Date
//! selection returns `Option`, so an empty bucket is never asked for its
//! latest date.

use crate::format::{format_currency, month_name, ordinal_day};
use crate::types::{
    AmountDisplay, DateSpan, HighlightSummary, RawTransactionRecord, Totals, TransactionType,
};
use chrono::NaiveDate;

/// Latest calendar date among records of one bucket
///
/// Order-independent; ties are fine. `None` if the bucket is empty.
pub fn latest_date(records: &[RawTransactionRecord], tx_type: TransactionType) -> Option<NaiveDate> {
    records
        .iter()
        .filter(|record| record.tx_type == tx_type)
        .map(|record| record.date)
        .max()
}

/// Earliest and latest dates over all records, regardless of bucket
pub fn date_span(records: &[RawTransactionRecord]) -> Option<DateSpan> {
    let mut dates = records.iter().map(|record| record.date);
    let first = dates.next()?;

    let span = dates.fold(DateSpan { first, last: first }, |span, date| DateSpan {
        first: span.first.min(date),
        last: span.last.max(date),
    });
    Some(span)
}

/// `<Mon> <day>th` for a single date
pub fn describe_day(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), ordinal_day(date))
}

/// Description of the latest inflow
pub fn describe_last_entry(date: NaiveDate) -> String {
    format!("Last entry was {}", describe_day(date))
}

/// Description of the latest outflow
pub fn describe_last_out(date: NaiveDate) -> String {
    format!("Last out was {}", describe_day(date))
}

/// Description of the whole span, named after the month of its last date
pub fn describe_span(span: DateSpan) -> String {
    format!(
        "{} from {} to {}",
        month_name(span.last),
        ordinal_day(span.first),
        ordinal_day(span.last)
    )
}

/// Build the three highlight cards
pub fn build_highlights(records: &[RawTransactionRecord], totals: &Totals) -> HighlightSummary {
    let entries = latest_date(records, TransactionType::Inflow)
        .map(describe_last_entry)
        .unwrap_or_default();
    let expensive = latest_date(records, TransactionType::Outflow)
        .map(describe_last_out)
        .unwrap_or_default();
    let total = date_span(records).map(describe_span).unwrap_or_default();

    HighlightSummary {
        entries: AmountDisplay {
            amount: format_currency(totals.entries),
            last_transaction: entries,
        },
        expensive: AmountDisplay {
            amount: format_currency(totals.expensive),
            last_transaction: expensive,
        },
        total: AmountDisplay {
            amount: format_currency(totals.total),
            last_transaction: total,
        },
    }
}
