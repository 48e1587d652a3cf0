//! Formatting leaves
//!
//! Deterministic, locale-fixed formatters with no state:
//! - `currency` - `pt-BR` / `BRL` currency strings
//! - `date` - short dates, month labels and ordinal-day labels

pub mod currency;
pub mod date;

pub use currency::format_currency;
pub use date::{format_short_date, month_name, ordinal_day};
