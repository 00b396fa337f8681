//! Text formatting for calculator output.
//!
//! On-screen money uses banker's rounding and thousands separators
//! (`1,216.04`); exported and tabulated figures use half-up rounding with
//! no grouping (`1216.04`).

use estate_core::calculations::common::{round_half_even, round_half_up};
use rust_decimal::Decimal;

/// Inserts a comma between every group of three integer digits.
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

/// Renders an already-rounded value with `dp` places and grouped digits.
fn grouped(
    value: Decimal,
    dp: usize,
) -> String {
    // -0.00 prints as 0.00
    let value = if value.is_zero() { Decimal::ZERO } else { value };
    let plain = format!("{:.*}", dp, value.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats a currency amount as `#,##0.00` (no currency symbol).
pub fn format_currency(value: Decimal) -> String {
    grouped(round_half_even(value, 2), 2)
}

/// Formats a currency amount rounded to whole dollars as `#,##0`.
pub fn format_whole_dollars(value: Decimal) -> String {
    grouped(round_half_even(value, 0), 0)
}

/// Formats a percentage figure with two decimals and a `%` sign.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_amount(value))
}

/// Formats a figure with two decimals, half-up, without grouping.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{rounded:.2}")
}
