//! Affordability estimation from income and existing debts.
//!
//! The largest monthly mortgage payment a household can carry is the
//! debt-to-income ceiling applied to gross monthly income, less existing
//! monthly debts. That payment is converted back into a loan amount by
//! inverting the annuity formula, and the loan into a home price by adding
//! the down payment share:
//!
//! ```text
//! max_payment = annual_income / 12 × max_dti − monthly_debts
//! loan        = max_payment ÷ (r(1+r)^n / ((1+r)^n − 1))     (r > 0)
//!             = max_payment × n                               (r = 0)
//! price       = loan ÷ (1 − down%)
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::annuity_factor;
use crate::{
    Affordability, AffordabilityEstimate, AffordabilityInput, FinancePolicy, LoanTerms,
    MONTHS_PER_YEAR,
};

/// Calculator for the most expensive home a household can afford.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::{Affordability, AffordabilityCalculator, AffordabilityInput, FinancePolicy};
///
/// let calculator = AffordabilityCalculator::new(FinancePolicy::default());
/// let result = calculator.estimate(&AffordabilityInput {
///     annual_income: dec!(75000),
///     monthly_debts: dec!(500),
///     down_payment_percent: dec!(20),
///     annual_rate_percent: dec!(4.5),
///     years: 30,
/// });
///
/// let Affordability::Affordable(estimate) = result else {
///     panic!("expected an affordable estimate");
/// };
/// assert_eq!(estimate.max_monthly_payment, dec!(1750));
/// assert_eq!(estimate.loan_amount.round(), dec!(345382));
/// assert_eq!(estimate.home_price.round(), dec!(431728));
/// ```
#[derive(Debug, Clone)]
pub struct AffordabilityCalculator {
    policy: FinancePolicy,
}

impl AffordabilityCalculator {
    pub fn new(policy: FinancePolicy) -> Self {
        Self { policy }
    }

    pub fn estimate(
        &self,
        input: &AffordabilityInput,
    ) -> Affordability {
        let Some(max_monthly_payment) = self.max_monthly_payment(input) else {
            warn!(
                annual_income = %input.annual_income,
                monthly_debts = %input.monthly_debts,
                "max payment overflowed; estimate is zero"
            );
            return zero_estimate(Decimal::ZERO);
        };

        if max_monthly_payment <= Decimal::ZERO {
            debug!(
                max_monthly_payment = %max_monthly_payment,
                "debts exceed debt-to-income allowance"
            );
            return Affordability::NotAffordable {
                max_monthly_payment,
            };
        }

        let terms = LoanTerms::new(Decimal::ZERO, input.annual_rate_percent, input.years);
        let down_fraction = input.down_payment_percent / Decimal::ONE_HUNDRED;
        if !terms.has_payable_term() || down_fraction >= Decimal::ONE {
            warn!(
                years = input.years,
                down_payment_percent = %input.down_payment_percent,
                "unpayable term or down payment of 100% or more; estimate is zero"
            );
            return zero_estimate(max_monthly_payment);
        }

        let Some(estimate) = supported_purchase(max_monthly_payment, &terms, down_fraction) else {
            warn!(
                max_monthly_payment = %max_monthly_payment,
                annual_rate_percent = %input.annual_rate_percent,
                "no finite loan supports this payment; estimate is zero"
            );
            return zero_estimate(max_monthly_payment);
        };

        Affordability::Affordable(estimate)
    }

    /// Debt-to-income allowance on gross monthly income, less existing debts.
    fn max_monthly_payment(
        &self,
        input: &AffordabilityInput,
    ) -> Option<Decimal> {
        let monthly_income = input.annual_income / Decimal::from(MONTHS_PER_YEAR);
        monthly_income
            .checked_mul(self.policy.max_debt_to_income)?
            .checked_sub(input.monthly_debts)
    }
}

/// Loan whose level payment equals `payment` over the term, grossed up by
/// the down payment share. `None` on overflow or when the annuity factor is
/// not positive (monthly rates of -100% or below).
fn supported_purchase(
    payment: Decimal,
    terms: &LoanTerms,
    down_fraction: Decimal,
) -> Option<AffordabilityEstimate> {
    let monthly_rate = terms.monthly_rate();
    let payments = terms.payment_count();

    let loan_amount = if monthly_rate.is_zero() {
        payment.checked_mul(Decimal::from(payments))?
    } else {
        let factor = annuity_factor(monthly_rate, payments);
        if factor <= Decimal::ZERO {
            return None;
        }
        payment.checked_div(factor)?
    };

    let home_price = loan_amount.checked_div(Decimal::ONE.checked_sub(down_fraction)?)?;
    let down_payment = home_price.checked_mul(down_fraction)?;

    Some(AffordabilityEstimate {
        home_price,
        down_payment,
        loan_amount,
        max_monthly_payment: payment,
    })
}

/// All-zero estimate that still reports the payment allowance.
fn zero_estimate(max_monthly_payment: Decimal) -> Affordability {
    Affordability::Affordable(AffordabilityEstimate {
        home_price: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        loan_amount: Decimal::ZERO,
        max_monthly_payment,
    })
}

impl Default for AffordabilityCalculator {
    fn default() -> Self {
        Self::new(FinancePolicy::default())
    }
}

/// Estimates affordability under the default 36% debt-to-income ceiling.
pub fn estimate_affordability(input: &AffordabilityInput) -> Affordability {
    AffordabilityCalculator::default().estimate(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::calculations::monthly_payment;

    fn default_input() -> AffordabilityInput {
        AffordabilityInput {
            annual_income: dec!(75000),
            monthly_debts: dec!(500),
            down_payment_percent: dec!(20),
            annual_rate_percent: dec!(4.5),
            years: 30,
        }
    }

    fn affordable(result: Affordability) -> AffordabilityEstimate {
        match result {
            Affordability::Affordable(estimate) => estimate,
            other => panic!("expected Affordable, got {other:?}"),
        }
    }

    #[test]
    fn estimate_default_household() {
        let estimate = affordable(estimate_affordability(&default_input()));

        assert_eq!(estimate.max_monthly_payment, dec!(1750));
        assert_eq!(round_half_up(estimate.loan_amount), dec!(345382.03));
        assert_eq!(round_half_up(estimate.home_price), dec!(431727.54));
        assert_eq!(round_half_up(estimate.down_payment), dec!(86345.51));
    }

    #[test]
    fn supported_loan_pays_back_at_max_payment() {
        let estimate = affordable(estimate_affordability(&default_input()));

        let payment = monthly_payment(estimate.loan_amount, dec!(4.5), 30);

        assert_eq!(round_half_up(payment), dec!(1750.00));
    }

    #[test]
    fn price_is_loan_plus_down_payment() {
        let estimate = affordable(estimate_affordability(&default_input()));

        assert_eq!(
            round_half_up(estimate.home_price),
            round_half_up(estimate.loan_amount + estimate.down_payment)
        );
    }

    #[test]
    fn zero_rate_loan_is_payment_times_months() {
        let input = AffordabilityInput {
            annual_rate_percent: Decimal::ZERO,
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.loan_amount, dec!(630000));
    }

    #[test]
    fn zero_down_payment_finances_whole_price() {
        let input = AffordabilityInput {
            down_payment_percent: Decimal::ZERO,
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.home_price, estimate.loan_amount);
        assert_eq!(estimate.down_payment, Decimal::ZERO);
    }

    #[test]
    fn debts_above_allowance_are_not_affordable() {
        let input = AffordabilityInput {
            monthly_debts: dec!(2500),
            ..default_input()
        };

        let result = estimate_affordability(&input);

        assert_eq!(
            result,
            Affordability::NotAffordable {
                max_monthly_payment: dec!(-750)
            }
        );
        assert!(!result.is_affordable());
    }

    #[test]
    fn debts_equal_to_allowance_are_not_affordable() {
        let input = AffordabilityInput {
            monthly_debts: dec!(2250),
            ..default_input()
        };

        let result = estimate_affordability(&input);

        assert!(!result.is_affordable());
        assert_eq!(result.max_monthly_payment(), Decimal::ZERO);
    }

    #[test]
    fn debt_to_income_ceiling_comes_from_policy() {
        let policy = FinancePolicy {
            max_debt_to_income: dec!(0.28),
            ..FinancePolicy::default()
        };

        let result = AffordabilityCalculator::new(policy).estimate(&default_input());

        assert_eq!(result.max_monthly_payment(), dec!(1250));
    }

    #[test]
    fn non_positive_term_gives_zero_estimate() {
        let input = AffordabilityInput {
            years: 0,
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.home_price, Decimal::ZERO);
        assert_eq!(estimate.loan_amount, Decimal::ZERO);
        assert_eq!(estimate.max_monthly_payment, dec!(1750));
    }

    #[test]
    fn full_down_payment_gives_zero_estimate() {
        let input = AffordabilityInput {
            down_payment_percent: dec!(100),
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.home_price, Decimal::ZERO);
        assert_eq!(estimate.down_payment, Decimal::ZERO);
    }

    #[test]
    fn minus_one_hundred_percent_monthly_rate_gives_zero_estimate() {
        // -1200% a year makes the annuity factor exactly zero
        let input = AffordabilityInput {
            annual_rate_percent: dec!(-1200),
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.loan_amount, Decimal::ZERO);
        assert_eq!(estimate.home_price, Decimal::ZERO);
        assert_eq!(estimate.max_monthly_payment, dec!(1750));
    }

    #[test]
    fn rates_below_minus_one_hundred_percent_never_panic() {
        for rate in [dec!(-1300), dec!(-2400), dec!(-3600), dec!(-120000)] {
            let input = AffordabilityInput {
                annual_rate_percent: rate,
                ..default_input()
            };

            let result = estimate_affordability(&input);

            assert!(result.is_affordable(), "rate {rate}");
        }
    }

    #[test]
    fn overflowing_income_gives_zero_estimate() {
        let input = AffordabilityInput {
            annual_income: Decimal::MAX,
            monthly_debts: Decimal::MIN,
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.home_price, Decimal::ZERO);
        assert_eq!(estimate.max_monthly_payment, Decimal::ZERO);
    }

    #[test]
    fn overflowing_zero_rate_loan_gives_zero_estimate() {
        let input = AffordabilityInput {
            annual_income: Decimal::MAX,
            monthly_debts: Decimal::ZERO,
            annual_rate_percent: Decimal::ZERO,
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.loan_amount, Decimal::ZERO);
        assert!(estimate.max_monthly_payment > Decimal::ZERO);
    }

    #[test]
    fn term_beyond_maximum_gives_zero_estimate() {
        let input = AffordabilityInput {
            years: crate::MAX_TERM_YEARS + 1,
            ..default_input()
        };

        let estimate = affordable(estimate_affordability(&input));

        assert_eq!(estimate.loan_amount, Decimal::ZERO);
        assert_eq!(estimate.max_monthly_payment, dec!(1750));
    }
}
