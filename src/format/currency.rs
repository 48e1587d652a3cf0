//! Currency formatting for the fixed `pt-BR` / `BRL` pair
//!
//! Output matches what the platform locale produces for
//! `toLocaleString("pt-BR", { style: "currency", currency: "BRL" })`:
//! `R$`, a non-breaking space, `.` between thousands, `,` before the two
//! fraction digits, and a leading `-` for negative values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol for Brazilian reais
pub const CURRENCY_SYMBOL: &str = "R$";

const SYMBOL_SEPARATOR: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const FRACTION_DIGITS: u32 = 2;

/// Format an amount as a localized currency string
///
/// Rounds half away from zero to two fraction digits. A value that rounds to
/// zero is never signed.
pub fn format_currency(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut formatted = String::with_capacity(digits.len() + 8);
    if negative {
        formatted.push('-');
    }
    formatted.push_str(CURRENCY_SYMBOL);
    formatted.push(SYMBOL_SEPARATOR);
    formatted.push_str(&group_thousands(integer));
    formatted.push(DECIMAL_SEPARATOR);
    formatted.push_str(fraction);
    formatted
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}
