//! Date labels used by the transaction list and the highlight cards

use chrono::{Datelike, NaiveDate};

/// Short date label, `DD/MM/YYYY`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Three-letter English month label (`Jan` .. `Dec`)
pub fn month_name(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Day of month with a flat `th` suffix
///
/// `1th`, `2th`, `21th`: no 1st/2nd/3rd forms.
pub fn ordinal_day(date: NaiveDate) -> String {
    format!("{}th", date.day())
}
