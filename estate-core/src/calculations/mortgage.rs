//! Monthly payment sizing for fixed-rate mortgages.
//!
//! Uses the standard annuity formula
//!
//! ```text
//! payment = P · r · (1 + r)^n / ((1 + r)^n − 1)
//! ```
//!
//! where `P` is the principal, `r` the monthly rate (annual percentage / 100
//! / 12) and `n` the number of monthly payments (years × 12). A zero rate
//! degenerates to straight-line repayment `P / n`.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{LoanTerms, MAX_TERM_YEARS};
use crate::calculations::common::annuity_factor;

/// Computes the fixed monthly payment of an amortizing loan.
///
/// A non-positive principal or term yields a payment of zero rather than an
/// error; callers cannot tell "no loan" from "invalid loan" and do not need
/// to.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::calculations::{common::round_half_up, monthly_payment};
///
/// // $300,000 home with $60,000 down at 4.5% for 30 years
/// let payment = monthly_payment(dec!(240000), dec!(4.5), 30);
/// assert_eq!(round_half_up(payment), dec!(1216.04));
///
/// // Interest-free loans are repaid in equal slices
/// assert_eq!(monthly_payment(dec!(120000), dec!(0), 10), dec!(1000));
///
/// // Degenerate inputs produce no payment
/// assert_eq!(monthly_payment(dec!(0), dec!(4.5), 30), dec!(0));
/// ```
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: i32,
) -> Decimal {
    LoanTerms::new(principal, annual_rate_percent, years).monthly_payment()
}

impl LoanTerms {
    /// Fixed monthly payment for these terms. See [`monthly_payment`].
    pub fn monthly_payment(&self) -> Decimal {
        if self.principal <= Decimal::ZERO || self.years <= 0 {
            debug!(
                principal = %self.principal,
                years = self.years,
                "non-positive principal or term; payment is zero"
            );
            return Decimal::ZERO;
        }

        if !self.has_payable_term() {
            warn!(
                years = self.years,
                max_years = MAX_TERM_YEARS,
                "loan term too long; payment is zero"
            );
            return Decimal::ZERO;
        }

        let monthly_rate = self.monthly_rate();
        let payments = self.payment_count();

        if monthly_rate.is_zero() {
            return self.principal / Decimal::from(payments);
        }

        if monthly_rate < Decimal::ZERO {
            warn!(
                annual_rate_percent = %self.annual_rate_percent,
                "negative interest rate; applying annuity formula as given"
            );
        }

        self.principal
            .checked_mul(annuity_factor(monthly_rate, payments))
            .unwrap_or_else(|| {
                warn!(
                    principal = %self.principal,
                    annual_rate_percent = %self.annual_rate_percent,
                    "monthly payment overflowed; payment is zero"
                );
                Decimal::ZERO
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    #[test]
    fn standard_thirty_year_loan() {
        let payment = monthly_payment(dec!(240000), dec!(4.5), 30);

        assert_eq!(round_half_up(payment), dec!(1216.04));
    }

    #[test]
    fn rental_default_loan() {
        let payment = monthly_payment(dec!(225000), dec!(5), 30);

        assert_eq!(round_half_up(payment), dec!(1207.85));
    }

    #[test]
    fn fifteen_year_loan_at_six_percent() {
        let payment = monthly_payment(dec!(100000), dec!(6), 15);

        assert_eq!(round_half_up(payment), dec!(843.86));
    }

    #[test]
    fn zero_rate_is_exactly_straight_line() {
        let payment = monthly_payment(dec!(100000), Decimal::ZERO, 25);

        assert_eq!(payment, dec!(100000) / dec!(300));
    }

    #[test]
    fn zero_principal_pays_nothing() {
        assert_eq!(monthly_payment(Decimal::ZERO, dec!(4.5), 30), Decimal::ZERO);
    }

    #[test]
    fn negative_principal_pays_nothing() {
        assert_eq!(monthly_payment(dec!(-5000), dec!(4.5), 30), Decimal::ZERO);
    }

    #[test]
    fn zero_or_negative_term_pays_nothing() {
        assert_eq!(monthly_payment(dec!(240000), dec!(4.5), 0), Decimal::ZERO);
        assert_eq!(monthly_payment(dec!(240000), dec!(4.5), -1), Decimal::ZERO);
    }

    #[test]
    fn payment_is_positive_across_rates_and_terms() {
        for rate in [dec!(0), dec!(0.25), dec!(3), dec!(7.125), dec!(18)] {
            for years in [1, 5, 15, 30, 40] {
                let payment = monthly_payment(dec!(150000), rate, years);
                assert!(
                    payment > Decimal::ZERO,
                    "payment should be positive for rate {rate} and {years} years"
                );
            }
        }
    }

    #[test]
    fn payment_exceeds_straight_line_when_rate_is_positive() {
        let straight_line = monthly_payment(dec!(240000), Decimal::ZERO, 30);
        let with_interest = monthly_payment(dec!(240000), dec!(4.5), 30);

        assert!(with_interest > straight_line);
    }

    #[test]
    fn extreme_rate_converges_to_interest_only() {
        // (1 + 10)^600 overflows; the payment is principal × monthly rate
        let payment = monthly_payment(dec!(1000), dec!(12000), 50);

        assert_eq!(payment, dec!(10000));
    }

    #[test]
    fn overflowing_payment_is_zero() {
        assert_eq!(monthly_payment(Decimal::MAX, dec!(100000), 30), Decimal::ZERO);
    }

    #[test]
    fn largest_principal_at_normal_rate_still_pays() {
        // the factor is below one, so the product stays in range
        let payment = monthly_payment(Decimal::MAX, dec!(4.5), 30);

        assert!(payment > Decimal::ZERO);
        assert!(payment < Decimal::MAX);
    }

    #[test]
    fn term_beyond_maximum_pays_nothing() {
        assert!(monthly_payment(dec!(240000), dec!(4.5), MAX_TERM_YEARS) > Decimal::ZERO);
        assert_eq!(
            monthly_payment(dec!(240000), dec!(4.5), MAX_TERM_YEARS + 1),
            Decimal::ZERO
        );
    }

    #[test]
    fn tiny_rate_over_huge_term_returns_promptly() {
        assert_eq!(
            monthly_payment(dec!(240000), dec!(0.0000000001), 2_000_000_000),
            Decimal::ZERO
        );
        assert!(monthly_payment(dec!(240000), dec!(0.0000000001), MAX_TERM_YEARS) > Decimal::ZERO);
    }

    #[test]
    fn minus_one_hundred_percent_monthly_rate_pays_nothing() {
        // -1200% a year is -100% a month
        assert_eq!(monthly_payment(dec!(240000), dec!(-1200), 30), Decimal::ZERO);
    }
}
