//! Display formatting for money and rates.

use rust_decimal::Decimal;

use crate::calculations::common::fixed_places;

/// Formats a dollar amount: two fraction digits, half-up rounding, `,`
/// grouping, and the minus sign ahead of the `$`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use profit_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
/// assert_eq!(format_currency(dec!(-210)), "-$210.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let amount = fixed_places(value, 2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let text = fixed_text(amount.abs(), 2);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Formats a rate with one fraction digit and a `%` suffix.
pub fn format_percentage(value: Decimal) -> String {
    format_rate(value, 1)
}

/// Formats a rate with exactly `places` fraction digits and a `%` suffix.
pub fn format_rate(
    value: Decimal,
    places: u32,
) -> String {
    format!("{}%", fixed_text(value, places))
}

/// `value` as text with exactly `places` fraction digits, zero-padded where
/// the decimal itself could not carry them.
fn fixed_text(
    value: Decimal,
    places: u32,
) -> String {
    let text = fixed_places(value, places).to_string();
    let width = places as usize;
    if width == 0 {
        return text;
    }
    match text.split_once('.') {
        Some((whole, fraction)) => format!("{whole}.{fraction:0<width$}"),
        None => format!("{text}.{:0<width$}", ""),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
