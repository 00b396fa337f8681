use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closing costs assumed on top of the down payment, as a fraction of price.
pub const DEFAULT_CLOSING_COST_RATE: Decimal = dec!(0.03);

/// Share of gross monthly income that total debt service may consume.
pub const DEFAULT_MAX_DEBT_TO_INCOME: Decimal = dec!(0.36);

/// Errors raised when a [`FinancePolicy`] holds out-of-range values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinancePolicyError {
    /// The closing-cost rate must be between 0 and 1.
    #[error("closing cost rate must be between 0 and 1, got {0}")]
    InvalidClosingCostRate(Decimal),

    /// The debt-to-income ceiling must be between 0 and 1.
    #[error("max debt-to-income ratio must be between 0 and 1, got {0}")]
    InvalidMaxDebtToIncome(Decimal),
}

/// Policy constants shared by the rental and affordability calculations.
///
/// Both values are fractions, not percentages: `0.03` means three percent.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::FinancePolicy;
///
/// let policy = FinancePolicy::default();
///
/// assert_eq!(policy.closing_cost_rate, dec!(0.03));
/// assert_eq!(policy.max_debt_to_income, dec!(0.36));
/// assert_eq!(policy.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancePolicy {
    /// Closing costs as a fraction of the purchase price, counted as part of
    /// the cash invested in a rental.
    pub closing_cost_rate: Decimal,

    /// Ceiling on monthly debt service as a fraction of gross monthly income.
    pub max_debt_to_income: Decimal,
}

impl Default for FinancePolicy {
    fn default() -> Self {
        Self {
            closing_cost_rate: DEFAULT_CLOSING_COST_RATE,
            max_debt_to_income: DEFAULT_MAX_DEBT_TO_INCOME,
        }
    }
}

impl FinancePolicy {
    /// Validates the policy values.
    ///
    /// # Errors
    ///
    /// Returns [`FinancePolicyError`] if either fraction lies outside `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use estate_core::{FinancePolicy, FinancePolicyError};
    ///
    /// let policy = FinancePolicy {
    ///     closing_cost_rate: dec!(1.5),
    ///     ..FinancePolicy::default()
    /// };
    ///
    /// assert_eq!(
    ///     policy.validate(),
    ///     Err(FinancePolicyError::InvalidClosingCostRate(dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), FinancePolicyError> {
        if self.closing_cost_rate < Decimal::ZERO || self.closing_cost_rate > Decimal::ONE {
            return Err(FinancePolicyError::InvalidClosingCostRate(
                self.closing_cost_rate,
            ));
        }
        if self.max_debt_to_income < Decimal::ZERO || self.max_debt_to_income > Decimal::ONE {
            return Err(FinancePolicyError::InvalidMaxDebtToIncome(
                self.max_debt_to_income,
            ));
        }
        Ok(())
    }
}
