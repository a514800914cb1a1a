//! Display formatting for money and percentages.
//!
//! Rounding to two decimal places happens here and nowhere else; ledger
//! arithmetic stays exact.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formats an amount with thousands grouping and two decimal places,
/// prefixed by a currency code, e.g. `SAR 1,885,908.00`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{currency} {}", format_amount(amount))
}

/// Formats an amount with thousands grouping and two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    let text = rounded.to_string();
    let negative = text.starts_with('-');
    let unsigned = text.trim_start_matches('-');
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}.{frac_part}", group_digits(int_part))
}

/// Formats a percentage with two decimal places, e.g. `60.00%`.
pub fn format_percent(percentage: Decimal) -> String {
    let mut rounded = percentage.round_dp(2);
    rounded.rescale(2);
    format!("{rounded}%")
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn group_digits(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
