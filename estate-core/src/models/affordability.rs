use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Household figures used to size an affordable purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub annual_income: Decimal,
    pub monthly_debts: Decimal,
    /// Down payment as a percentage of the price (`20` means 20%).
    pub down_payment_percent: Decimal,
    pub annual_rate_percent: Decimal,
    pub years: i32,
}

/// Largest purchase the debt-to-income ceiling supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityEstimate {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    pub loan_amount: Decimal,
    pub max_monthly_payment: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Affordability {
    Affordable(AffordabilityEstimate),
    /// Existing debts already consume the whole debt-to-income allowance.
    NotAffordable { max_monthly_payment: Decimal },
}

impl Affordability {
    pub fn is_affordable(&self) -> bool {
        matches!(self, Self::Affordable(_))
    }

    pub fn max_monthly_payment(&self) -> Decimal {
        match self {
            Self::Affordable(estimate) => estimate.max_monthly_payment,
            Self::NotAffordable {
                max_monthly_payment,
            } => *max_monthly_payment,
        }
    }
}
