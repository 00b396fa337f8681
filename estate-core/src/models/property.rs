use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::LoanTerms;

/// A rental property under evaluation.
///
/// Rent and expenses are monthly; the rate is an annual percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub price: Decimal,
    pub down_payment: Decimal,
    pub annual_rate_percent: Decimal,
    pub monthly_rent: Decimal,
    pub monthly_expenses: Decimal,
    pub years: i32,
}

impl PropertyInput {
    /// Terms of the mortgage that finances the price less the down payment.
    /// The loan amount saturates at the bounds of [`Decimal`].
    pub fn loan_terms(&self) -> LoanTerms {
        LoanTerms::new(
            self.price.saturating_sub(self.down_payment),
            self.annual_rate_percent,
            self.years,
        )
    }
}

/// Cash-flow figures for one property, computed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetrics {
    pub monthly_payment: Decimal,
    /// Rent less expenses less the mortgage payment; negative when the
    /// property loses money each month.
    pub monthly_cash_flow: Decimal,
    /// Annual cash flow over total cash invested, as a percentage.
    pub cash_on_cash_return: Decimal,
    /// Annual net operating income over price, as a percentage.
    pub cap_rate: Decimal,
    /// Down payment plus estimated closing costs.
    pub total_investment: Decimal,
}

/// Which of two compared properties has the better cash-on-cash return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    First,
    Second,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "Property 1",
            Self::Second => "Property 2",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metrics for two properties side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub first: PropertyMetrics,
    pub second: PropertyMetrics,
    pub winner: Winner,
}
