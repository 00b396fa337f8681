//! Common utility functions for finance calculations.
//!
//! This module provides shared functionality used across the mortgage,
//! amortization, rental and affordability calculations: rounding, clamping
//! and the compound-growth terms of the annuity formula.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to `dp` decimal places, sending midpoints to the even neighbour.
///
/// Used for on-screen figures, where banker's rounding keeps long columns of
/// rounded values from drifting upwards.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::calculations::common::round_half_even;
///
/// assert_eq!(round_half_even(dec!(2.125), 2), dec!(2.12));
/// assert_eq!(round_half_even(dec!(2.135), 2), dec!(2.14));
/// assert_eq!(round_half_even(dec!(86345.5), 0), dec!(86346));
/// ```
pub fn round_half_even(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-0.01), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Computes `(1 + rate)^periods` by exponentiation by squaring.
///
/// Returns `None` when the result leaves the range of [`Decimal`].
pub fn compound_growth(
    rate: Decimal,
    periods: u32,
) -> Option<Decimal> {
    let mut base = Decimal::ONE.checked_add(rate)?;
    let mut result = Decimal::ONE;
    let mut remaining = periods;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

/// Payment per unit of principal for a level-payment loan:
/// `r(1+r)^n / ((1+r)^n - 1)`.
///
/// Expects `rate > 0` and `periods > 0`; zero periods give a zero factor.
/// When `(1+r)^n` or the numerator overflows, the factor has converged to
/// `r` (interest-only), which is returned instead; when the rate is too
/// small to register in `(1+r)^n` the straight-line factor `1/n` is
/// returned.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::calculations::common::{annuity_factor, round_half_up};
///
/// // 12 payments at 1% a month
/// let factor = annuity_factor(dec!(0.01), 12);
/// assert_eq!(round_half_up(factor * dec!(10000)), dec!(888.49));
/// ```
pub fn annuity_factor(
    rate: Decimal,
    periods: u32,
) -> Decimal {
    if periods == 0 {
        return Decimal::ZERO;
    }

    let Some(growth) = compound_growth(rate, periods) else {
        debug!(
            rate = %rate,
            periods,
            "compound growth overflowed; using interest-only factor"
        );
        return rate;
    };

    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        debug!(
            rate = %rate,
            periods,
            "rate too small to compound; using straight-line factor"
        );
        return Decimal::ONE / Decimal::from(periods);
    }

    rate.checked_mul(growth)
        .and_then(|numerator| numerator.checked_div(denominator))
        .unwrap_or_else(|| {
            debug!(
                rate = %rate,
                periods,
                "annuity numerator overflowed; using interest-only factor"
            );
            rate
        })
}
