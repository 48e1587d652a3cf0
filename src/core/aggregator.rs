//! Transaction aggregation
//!
//! This module provides the Aggregator that turns stored records into a
//! [`Dashboard`]: validated records are summed per bucket, formatted for
//! display, and annotated with date-range descriptions.
//!
//! The aggregator enforces these rules:
//! - Sums only include records whose type matches the bucket
//! - `total == entries - expensive`, computed in exact decimal arithmetic
//! - The formatted list preserves input order, one entry per accepted record
//! - Unparseable amounts are handled per [`AmountPolicy`], never propagated as NaN
//! - Sums are checked: an amount that would overflow the totals is handled
//!   per [`AmountPolicy`] like an unparseable one

use crate::core::highlights::build_highlights;
use crate::format::{format_currency, format_short_date};
use crate::io::json_format::{parse_amount, parse_date, parse_text_field, parse_transaction_type};
use crate::types::{
    display_value, Dashboard, DashboardError, FormattedTransaction, RawTransactionRecord,
    RejectedRecord, StoredRecord, Summary, Totals, TransactionType,
};
use clap::ValueEnum;
use rust_decimal::Decimal;

/// What to do with a stored record whose amount cannot be used
///
/// Applies to unparseable or negative amounts and to amounts that would
/// overflow the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AmountPolicy {
    /// Drop the record and report it
    #[default]
    Skip,
    /// Keep the record with a zero amount and report it
    Zero,
    /// Abort the whole aggregation
    Fail,
}

/// Outcome of validating one stored record
enum Validated {
    Accepted(RawTransactionRecord),
    Clamped(RawTransactionRecord, DashboardError),
    Rejected(DashboardError),
}

/// Transaction aggregator
///
/// Stateless apart from its amount policy; every call is a pure function of
/// its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    policy: AmountPolicy,
}

impl Aggregator {
    /// Create a new Aggregator
    ///
    /// # Arguments
    ///
    /// * `policy` - How to treat records with unusable amounts
    pub fn new(policy: AmountPolicy) -> Self {
        Aggregator { policy }
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    /// Validate stored records and aggregate them into a dashboard
    ///
    /// Records that fail validation are listed in `Dashboard::rejected` and
    /// logged as warnings, unless the policy is `Fail`.
    ///
    /// # Errors
    ///
    /// With `AmountPolicy::Fail`, returns the first record error encountered
    /// (invalid field, amount, date or transaction type, or an overflowing
    /// amount).
    pub fn aggregate(&self, stored: Vec<StoredRecord>) -> Result<Dashboard, DashboardError> {
        let mut records = Vec::with_capacity(stored.len());
        let mut rejected = Vec::new();
        let mut running = Totals::zero();

        for stored_record in stored {
            let id = stored_record.display_id();

            // Only accepted amounts can push the totals out of range
            let validated = match self.validate(stored_record)? {
                Validated::Accepted(record) => self.admit(record, &mut running)?,
                other => other,
            };

            match validated {
                Validated::Accepted(record) => records.push(record),
                Validated::Clamped(record, error) => {
                    tracing::warn!(id = %id, "amount clamped to zero: {}", error);
                    rejected.push(RejectedRecord {
                        id,
                        reason: error.to_string(),
                    });
                    records.push(record);
                }
                Validated::Rejected(error) => {
                    tracing::warn!(id = %id, "record skipped: {}", error);
                    rejected.push(RejectedRecord {
                        id,
                        reason: error.to_string(),
                    });
                }
            }
        }

        let summary = summarize(&records)?;
        tracing::debug!(
            accepted = records.len(),
            rejected = rejected.len(),
            entries = %summary.totals.entries,
            expensive = %summary.totals.expensive,
            "aggregation finished"
        );

        Ok(Dashboard::from_summary(summary, rejected))
    }

    /// Convert one stored record according to the amount policy
    ///
    /// Field, type and date errors cannot be clamped, so they reject the
    /// record under both `Skip` and `Zero`.
    fn validate(&self, stored: StoredRecord) -> Result<Validated, DashboardError> {
        let id = stored.display_id();

        let parsed = parse_identity(&stored, &id).and_then(|identity| {
            let tx_type = parse_transaction_type(&display_value(&stored.tx_type), &id)?;
            let date = parse_date(&display_value(&stored.date), &id)?;
            Ok((identity, tx_type, date))
        });

        let ((id, name, category), tx_type, date) = match parsed {
            Ok(parsed) => parsed,
            Err(error) if self.policy == AmountPolicy::Fail => return Err(error),
            Err(error) => return Ok(Validated::Rejected(error)),
        };

        let amount = parse_amount(&stored.amount, &id);
        let record = RawTransactionRecord {
            id,
            name,
            category,
            tx_type,
            amount: Decimal::ZERO,
            date,
        };

        match amount {
            Ok(amount) => Ok(Validated::Accepted(RawTransactionRecord { amount, ..record })),
            Err(error) => self.apply_policy(record, error),
        }
    }

    /// Add an accepted record to the running totals
    ///
    /// On overflow the amount policy decides, as for an unparseable amount.
    fn admit(&self, record: RawTransactionRecord, running: &mut Totals) -> Result<Validated, DashboardError> {
        match accumulate(running, &record) {
            Ok(next) => {
                *running = next;
                Ok(Validated::Accepted(record))
            }
            Err(error) => self.apply_policy(record, error),
        }
    }

    /// Apply the amount policy to a record whose amount cannot be used
    fn apply_policy(&self, record: RawTransactionRecord, error: DashboardError) -> Result<Validated, DashboardError> {
        match self.policy {
            AmountPolicy::Fail => Err(error),
            AmountPolicy::Skip => Ok(Validated::Rejected(error)),
            AmountPolicy::Zero => Ok(Validated::Clamped(
                RawTransactionRecord {
                    amount: Decimal::ZERO,
                    ..record
                },
                error,
            )),
        }
    }
}

/// Identity fields of a stored record as text: id, name, category
fn parse_identity(stored: &StoredRecord, id: &str) -> Result<(String, String, String), DashboardError> {
    Ok((
        parse_text_field(&stored.id, "id", id)?,
        parse_text_field(&stored.name, "name", id)?,
        parse_text_field(&stored.category, "category", id)?,
    ))
}

/// Add one record to a set of totals, failing instead of overflowing
fn accumulate(totals: &Totals, record: &RawTransactionRecord) -> Result<Totals, DashboardError> {
    let (entries, expensive) = match record.tx_type {
        TransactionType::Inflow => (totals.entries.checked_add(record.amount), Some(totals.expensive)),
        TransactionType::Outflow => (Some(totals.entries), totals.expensive.checked_add(record.amount)),
    };

    entries
        .zip(expensive)
        .and_then(|(entries, expensive)| {
            Some(Totals {
                entries,
                expensive,
                total: entries.checked_sub(expensive)?,
            })
        })
        .ok_or_else(|| DashboardError::amount_overflow(&record.amount.to_string(), &record.id))
}

/// Sum the amounts per bucket
///
/// # Errors
///
/// Returns `DashboardError::AmountOverflow` for the first record whose amount
/// no longer fits in the totals.
pub fn compute_totals(records: &[RawTransactionRecord]) -> Result<Totals, DashboardError> {
    records
        .iter()
        .try_fold(Totals::zero(), |totals, record| accumulate(&totals, record))
}

/// Project one record for display
pub fn format_transaction(record: &RawTransactionRecord) -> FormattedTransaction {
    FormattedTransaction {
        id: record.id.clone(),
        name: record.name.clone(),
        category: record.category.clone(),
        tx_type: record.tx_type,
        amount: format_currency(record.amount),
        date: format_short_date(record.date),
    }
}

/// Aggregate validated records
///
/// The formatted list preserves input order and length, and the highlights
/// are always fully populated, even for an empty slice.
///
/// # Errors
///
/// Returns `DashboardError::AmountOverflow` if the amounts cannot be summed.
/// [`Aggregator::aggregate`] never hands this function such records.
pub fn summarize(records: &[RawTransactionRecord]) -> Result<Summary, DashboardError> {
    let totals = compute_totals(records)?;

    Ok(Summary {
        transactions: records.iter().map(format_transaction).collect(),
        highlights: build_highlights(records, &totals),
        totals,
    })
}
