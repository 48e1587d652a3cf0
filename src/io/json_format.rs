//! JSON format handling for stored transaction records
//!
//! This module centralizes all store format concerns, providing:
//! - Decoding of the stored transactions value into `StoredRecord`s
//! - Field parsers for transaction type, amount and date
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Date encoding
//!
//! Dates are accepted only in year-first ISO-8601 form. Day-first strings such
//! as `01/05/2020` are rejected here rather than silently mis-ordered later.

use crate::types::{DashboardError, StoredAmount, StoredRecord, TransactionType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Decode the value stored under the transactions key
///
/// Absence of data is not an error: `None`, a blank string and JSON `null`
/// all produce an empty collection.
///
/// # Errors
///
/// Returns `DashboardError::MalformedStore` if the value is not a JSON array
/// of objects.
pub fn parse_stored_transactions(raw: Option<&str>) -> Result<Vec<StoredRecord>, DashboardError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    let records: Option<Vec<StoredRecord>> = serde_json::from_str(raw)?;
    Ok(records.unwrap_or_default())
}

/// Read an identity field (`id`, `name`, `category`) as text
///
/// Strings are taken verbatim and numbers in their JSON form, so a numeric id
/// `7` becomes `"7"`. A missing field is empty. Booleans, arrays and objects
/// are errors.
pub fn parse_text_field(value: &Value, field: &str, id: &str) -> Result<String, DashboardError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(DashboardError::invalid_field(field, &other.to_string(), id)),
    }
}

/// Parse a transaction type literal
///
/// Case-insensitive. Accepts the literals written by the recording flow
/// (`Income` / `Outcome`) as well as `inflow`/`outflow` and the card
/// direction names `up`/`down`.
pub fn parse_transaction_type(tx_type: &str, id: &str) -> Result<TransactionType, DashboardError> {
    match tx_type.trim().to_lowercase().as_str() {
        "income" | "inflow" | "up" => Ok(TransactionType::Inflow),
        "outcome" | "outflow" | "down" => Ok(TransactionType::Outflow),
        _ => Err(DashboardError::invalid_transaction_type(tx_type, id)),
    }
}

/// Parse a stored amount into a Decimal
///
/// Whitespace is trimmed; scientific notation is accepted. Empty, missing,
/// non-numeric and negative amounts are errors: the bucket carries the sign.
pub fn parse_amount(amount: &StoredAmount, id: &str) -> Result<Decimal, DashboardError> {
    let text = match amount {
        StoredAmount::Text(text) => text.trim().to_string(),
        StoredAmount::Number(number) => number.to_string(),
        StoredAmount::Missing => String::new(),
    };

    if text.is_empty() {
        return Err(DashboardError::invalid_amount(&text, id));
    }

    let parsed = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| DashboardError::invalid_amount(&amount.to_string(), id))?;

    if parsed.is_sign_negative() && !parsed.is_zero() {
        return Err(DashboardError::invalid_amount(&amount.to_string(), id));
    }
    Ok(parsed.abs())
}

/// Parse a stored date
///
/// Accepted forms, all year-first:
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` (no offset)
/// - RFC 3339 with an offset, e.g. `2020-05-01T12:00:00.000Z`
///
/// The calendar date is taken as written, without shifting between offsets.
pub fn parse_date(date: &str, id: &str) -> Result<NaiveDate, DashboardError> {
    let text = date.trim();

    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.date());
    }

    Err(DashboardError::invalid_date(date, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    #[case::null(Some("null"))]
    #[case::empty_array(Some("[]"))]
    fn test_parse_stored_transactions_empty(#[case] raw: Option<&str>) {
        let records = parse_stored_transactions(raw).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_stored_transactions_full_record() {
        let raw = r#"[{"id":"1","name":"Salary","category":"salary","type":"Income","amount":"500","date":"2020-05-01"}]"#;

        let records = parse_stored_transactions(Some(raw)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].name, "Salary");
        assert_eq!(records[0].category, "salary");
        assert_eq!(records[0].tx_type, "Income");
        assert_eq!(records[0].amount, StoredAmount::Text("500".to_string()));
        assert_eq!(records[0].date, "2020-05-01");
    }

    #[test]
    fn test_parse_stored_transactions_missing_fields_default() {
        let raw = r#"[{"id":"9","amount":null}, {"name":"only a name"}]"#;

        let records = parse_stored_transactions(Some(raw)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, StoredAmount::Missing);
        assert_eq!(records[0].date, Value::Null);
        assert_eq!(records[1].id, Value::Null);
        assert_eq!(records[1].amount, StoredAmount::Missing);
    }

    #[test]
    fn test_parse_stored_transactions_numeric_amount() {
        let raw = r#"[{"id":"1","type":"Outcome","amount":42.5,"date":"2020-05-01"}]"#;

        let records = parse_stored_transactions(Some(raw)).unwrap();
        assert!(matches!(records[0].amount, StoredAmount::Number(_)));
        assert_eq!(
            parse_amount(&records[0].amount, "1").unwrap(),
            Decimal::new(425, 1)
        );
    }

    #[test]
    fn test_parse_stored_transactions_wrong_field_types() {
        let raw = r#"[
            {"id":"1","name":"Salary","category":"salary","type":"Income","amount":"500","date":"2020-05-01"},
            {"id":7,"name":{"first":"x"},"category":true,"type":1,"amount":"5","date":1588291200000}
        ]"#;

        let records = parse_stored_transactions(Some(raw)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display_id(), "7");
        assert_eq!(records[1].date, Value::from(1588291200000u64));
    }

    #[rstest]
    #[case::string(Value::from("Salary"), "Salary")]
    #[case::number(Value::from(7), "7")]
    #[case::missing(Value::Null, "")]
    fn test_parse_text_field(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(parse_text_field(&value, "name", "1").unwrap(), expected);
    }

    #[rstest]
    #[case::boolean(Value::from(true), "true")]
    #[case::array(serde_json::json!(["a"]), "[\"a\"]")]
    #[case::object(serde_json::json!({"a": 1}), "{\"a\":1}")]
    fn test_parse_text_field_errors(#[case] value: Value, #[case] shown: &str) {
        assert_eq!(
            parse_text_field(&value, "name", "1"),
            Err(DashboardError::invalid_field("name", shown, "1"))
        );
    }

    #[rstest]
    #[case::object(r#"{"id":"1"}"#)]
    #[case::truncated(r#"[{"id":"1""#)]
    #[case::not_json("transactions")]
    #[case::array_of_numbers("[1, 2, 3]")]
    fn test_parse_stored_transactions_malformed(#[case] raw: &str) {
        let result = parse_stored_transactions(Some(raw));
        assert!(matches!(result, Err(DashboardError::MalformedStore { .. })));
    }

    #[rstest]
    #[case("Income", TransactionType::Inflow)]
    #[case("income", TransactionType::Inflow)]
    #[case("INFLOW", TransactionType::Inflow)]
    #[case("up", TransactionType::Inflow)]
    #[case("Outcome", TransactionType::Outflow)]
    #[case(" outflow ", TransactionType::Outflow)]
    #[case("down", TransactionType::Outflow)]
    fn test_parse_transaction_type(#[case] input: &str, #[case] expected: TransactionType) {
        assert_eq!(parse_transaction_type(input, "1").unwrap(), expected);
    }

    #[rstest]
    #[case::unknown("transfer")]
    #[case::empty("")]
    fn test_parse_transaction_type_errors(#[case] input: &str) {
        let result = parse_transaction_type(input, "1");
        assert_eq!(
            result,
            Err(DashboardError::invalid_transaction_type(input, "1"))
        );
    }

    #[rstest]
    #[case::integer("500", Decimal::new(500, 0))]
    #[case::fraction("12.34", Decimal::new(1234, 2))]
    #[case::whitespace("  100.0  ", Decimal::new(1000, 1))]
    #[case::scientific("1e3", Decimal::new(1000, 0))]
    #[case::negative_zero("-0", Decimal::ZERO)]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Decimal) {
        let amount = StoredAmount::Text(input.to_string());
        assert_eq!(parse_amount(&amount, "1").unwrap(), expected);
    }

    #[rstest]
    #[case::empty(StoredAmount::Text(String::new()))]
    #[case::blank(StoredAmount::Text("   ".to_string()))]
    #[case::missing(StoredAmount::Missing)]
    #[case::word(StoredAmount::Text("abc".to_string()))]
    #[case::localized(StoredAmount::Text("1.234,56".to_string()))]
    #[case::negative(StoredAmount::Text("-5".to_string()))]
    #[case::negative_number(StoredAmount::Number(serde_json::Number::from(-12)))]
    fn test_parse_amount_errors(#[case] amount: StoredAmount) {
        let result = parse_amount(&amount, "1");
        assert!(matches!(result, Err(DashboardError::InvalidAmount { .. })));
    }

    #[rstest]
    #[case::plain("2020-05-01", (2020, 5, 1))]
    #[case::padded(" 2020-05-10 ", (2020, 5, 10))]
    #[case::utc_timestamp("2021-03-15T14:30:00.000Z", (2021, 3, 15))]
    #[case::offset_timestamp("2021-03-15T23:30:00-03:00", (2021, 3, 15))]
    #[case::naive_timestamp("2021-12-31T08:00:00", (2021, 12, 31))]
    #[case::naive_timestamp_millis("2021-12-31T08:00:00.250", (2021, 12, 31))]
    fn test_parse_date(#[case] input: &str, #[case] expected: (i32, u32, u32)) {
        let (y, m, d) = expected;
        assert_eq!(
            parse_date(input, "1").unwrap(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        );
    }

    #[rstest]
    #[case::day_first("01/05/2020")]
    #[case::day_first_dashes("01-05-2020")]
    #[case::impossible_day("2020-02-30")]
    #[case::empty("")]
    #[case::word("yesterday")]
    fn test_parse_date_errors(#[case] input: &str) {
        let result = parse_date(input, "1");
        assert_eq!(result, Err(DashboardError::invalid_date(input, "1")));
    }
}
