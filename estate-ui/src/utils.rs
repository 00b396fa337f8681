use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Largest magnitude a field accepts (one quadrillion); anything larger
/// counts as 0.
pub const MAX_INPUT_MAGNITUDE: Decimal = dec!(1000000000000000);

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
/// Returns an error when the input is non-empty but not parseable.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized
        .parse()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| ParseDecimalError {
            input: s.to_string(),
            source: e,
        })
}

/// Parses a field value, substituting 0 for anything unparseable or beyond
/// [`MAX_INPUT_MAGNITUDE`].
///
/// Calculator fields never reject input; a typo simply counts as zero and
/// is logged so it can be spotted.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    match parse_decimal(s) {
        Ok(value) if value.abs() > MAX_INPUT_MAGNITUDE => {
            tracing::warn!(input = %s, "field out of range treated as 0");
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "unparseable field treated as 0");
            Decimal::ZERO
        }
    }
}

/// Parses a loan term in whole years, truncating any fraction toward zero.
///
/// Unparseable or out-of-range input counts as 0 years.
pub fn parse_years(s: &str) -> i32 {
    let value = parse_decimal_or_zero(s).trunc();
    value.to_i32().unwrap_or_else(|| {
        tracing::warn!(input = %s, "loan term out of range treated as 0 years");
        0
    })
}
