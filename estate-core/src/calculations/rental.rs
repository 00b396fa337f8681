//! Rental property return calculations.
//!
//! | Figure | Formula |
//! |--------|---------|
//! | Monthly payment | annuity payment on price − down payment |
//! | Monthly cash flow | rent − expenses − monthly payment |
//! | Total investment | down payment + price × closing-cost rate |
//! | Cash-on-cash return | annual cash flow ÷ total investment × 100 |
//! | Cap rate | (rent − expenses) × 12 ÷ price × 100 |
//!
//! Ratios with a non-positive denominator are reported as zero.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    ComparisonOutcome, FinancePolicy, MONTHS_PER_YEAR, PropertyInput, PropertyMetrics, Winner,
};

/// Calculator for rental property metrics under a [`FinancePolicy`].
///
/// The policy is trusted as given; validate it with
/// [`FinancePolicy::validate`] when it comes from user configuration.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::{FinancePolicy, PropertyInput, RentalAnalysis};
/// use estate_core::calculations::common::round_half_up;
///
/// let analysis = RentalAnalysis::new(FinancePolicy::default());
/// let metrics = analysis.calculate(&PropertyInput {
///     price: dec!(300000),
///     down_payment: dec!(75000),
///     annual_rate_percent: dec!(5),
///     monthly_rent: dec!(2000),
///     monthly_expenses: dec!(400),
///     years: 30,
/// });
///
/// assert_eq!(round_half_up(metrics.monthly_payment), dec!(1207.85));
/// assert_eq!(round_half_up(metrics.monthly_cash_flow), dec!(392.15));
/// assert_eq!(metrics.total_investment, dec!(84000));
/// assert_eq!(metrics.cap_rate, dec!(6.4));
/// ```
#[derive(Debug, Clone)]
pub struct RentalAnalysis {
    policy: FinancePolicy,
}

impl RentalAnalysis {
    pub fn new(policy: FinancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FinancePolicy {
        &self.policy
    }

    /// Computes all five metrics for one property.
    ///
    /// Inputs too large to combine without overflow give all-zero metrics.
    pub fn calculate(
        &self,
        input: &PropertyInput,
    ) -> PropertyMetrics {
        let Some(metrics) = self.checked_metrics(input) else {
            warn!(
                price = %input.price,
                monthly_rent = %input.monthly_rent,
                "rental arithmetic overflowed; metrics reported as zero"
            );
            return PropertyMetrics::default();
        };

        debug!(
            price = %input.price,
            cash_flow = %metrics.monthly_cash_flow,
            coc = %metrics.cash_on_cash_return,
            "calculated rental metrics"
        );

        metrics
    }

    /// Calculates both properties and picks the one with the higher
    /// cash-on-cash return. A tie goes to the second property.
    pub fn compare(
        &self,
        first: &PropertyInput,
        second: &PropertyInput,
    ) -> ComparisonOutcome {
        let first = self.calculate(first);
        let second = self.calculate(second);

        let winner = if first.cash_on_cash_return > second.cash_on_cash_return {
            Winner::First
        } else {
            Winner::Second
        };

        ComparisonOutcome {
            first,
            second,
            winner,
        }
    }

    fn checked_metrics(
        &self,
        input: &PropertyInput,
    ) -> Option<PropertyMetrics> {
        let monthly_payment = input.loan_terms().monthly_payment();
        let monthly_cash_flow = input
            .monthly_rent
            .checked_sub(input.monthly_expenses)?
            .checked_sub(monthly_payment)?;
        let annual_cash_flow = monthly_cash_flow.checked_mul(Decimal::from(MONTHS_PER_YEAR))?;
        let total_investment = self.total_investment(input)?;

        Some(PropertyMetrics {
            monthly_payment,
            monthly_cash_flow,
            cash_on_cash_return: self.cash_on_cash_return(annual_cash_flow, total_investment)?,
            cap_rate: self.cap_rate(input)?,
            total_investment,
        })
    }

    /// Down payment plus closing costs estimated from the policy rate.
    fn total_investment(
        &self,
        input: &PropertyInput,
    ) -> Option<Decimal> {
        let closing_costs = input.price.checked_mul(self.policy.closing_cost_rate)?;
        input.down_payment.checked_add(closing_costs)
    }

    fn cash_on_cash_return(
        &self,
        annual_cash_flow: Decimal,
        total_investment: Decimal,
    ) -> Option<Decimal> {
        if total_investment <= Decimal::ZERO {
            warn!(
                total_investment = %total_investment,
                "no cash invested; cash-on-cash return reported as zero"
            );
            return Some(Decimal::ZERO);
        }

        annual_cash_flow
            .checked_div(total_investment)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }

    fn cap_rate(
        &self,
        input: &PropertyInput,
    ) -> Option<Decimal> {
        if input.price <= Decimal::ZERO {
            warn!(
                price = %input.price,
                "non-positive price; cap rate reported as zero"
            );
            return Some(Decimal::ZERO);
        }

        let months = Decimal::from(MONTHS_PER_YEAR);
        let annual_rent = input.monthly_rent.checked_mul(months)?;
        let annual_expenses = input.monthly_expenses.checked_mul(months)?;
        annual_rent
            .checked_sub(annual_expenses)?
            .checked_div(input.price)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}

impl Default for RentalAnalysis {
    fn default() -> Self {
        Self::new(FinancePolicy::default())
    }
}

/// Computes rental metrics under the default policy (3% closing costs).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::compare_property;
///
/// let metrics = compare_property(dec!(0), dec!(0), dec!(5), dec!(1000), dec!(200), 30);
///
/// assert_eq!(metrics.cap_rate, dec!(0));
/// assert_eq!(metrics.cash_on_cash_return, dec!(0));
/// ```
pub fn compare_property(
    price: Decimal,
    down_payment: Decimal,
    annual_rate_percent: Decimal,
    monthly_rent: Decimal,
    monthly_expenses: Decimal,
    years: i32,
) -> PropertyMetrics {
    RentalAnalysis::default().calculate(&PropertyInput {
        price,
        down_payment,
        annual_rate_percent,
        monthly_rent,
        monthly_expenses,
        years,
    })
}

/// Compares two properties under the default policy.
pub fn compare_properties(
    first: &PropertyInput,
    second: &PropertyInput,
) -> ComparisonOutcome {
    RentalAnalysis::default().compare(first, second)
}
