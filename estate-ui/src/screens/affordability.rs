use clap::Args;
use estate_core::{Affordability, AffordabilityCalculator, AffordabilityInput};
use tracing::debug;

use super::heading;
use crate::format::{format_amount, format_whole_dollars};
use crate::utils::{parse_decimal_or_zero, parse_years};

const DEFAULT_INCOME: &str = "75000";
const DEFAULT_DEBTS: &str = "500";
const DEFAULT_DOWN_PERCENT: &str = "20";
const DEFAULT_RATE: &str = "4.5";
const DEFAULT_YEARS: &str = "30";

#[derive(Debug, Clone, Args)]
pub struct AffordabilityForm {
    /// Annual income ($)
    #[arg(long, default_value = DEFAULT_INCOME, allow_hyphen_values = true)]
    pub income: String,

    /// Monthly debts ($)
    #[arg(long, default_value = DEFAULT_DEBTS, allow_hyphen_values = true)]
    pub debts: String,

    /// Down payment (% of price)
    #[arg(long, default_value = DEFAULT_DOWN_PERCENT, allow_hyphen_values = true)]
    pub down_percent: String,

    /// Interest rate (%)
    #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
    pub rate: String,

    /// Loan term (years)
    #[arg(long, default_value = DEFAULT_YEARS, allow_hyphen_values = true)]
    pub years: String,
}

impl Default for AffordabilityForm {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME.to_string(),
            debts: DEFAULT_DEBTS.to_string(),
            down_percent: DEFAULT_DOWN_PERCENT.to_string(),
            rate: DEFAULT_RATE.to_string(),
            years: DEFAULT_YEARS.to_string(),
        }
    }
}

impl AffordabilityForm {
    pub fn input(&self) -> AffordabilityInput {
        AffordabilityInput {
            annual_income: parse_decimal_or_zero(&self.income),
            monthly_debts: parse_decimal_or_zero(&self.debts),
            down_payment_percent: parse_decimal_or_zero(&self.down_percent),
            annual_rate_percent: parse_decimal_or_zero(&self.rate),
            years: parse_years(&self.years),
        }
    }
}

pub struct AffordabilityScreen;

impl AffordabilityScreen {
    pub const TITLE: &'static str = "Affordability Calculator";

    pub fn show(
        form: &AffordabilityForm,
        calculator: &AffordabilityCalculator,
    ) -> String {
        let result = calculator.estimate(&form.input());
        debug!(?result, "affordability estimated");

        let body = match result {
            Affordability::NotAffordable { .. } => {
                "Not affordable with current debts.\n".to_string()
            }
            Affordability::Affordable(estimate) => format!(
                "Affordable Home Price: ${}\n\
                 Down Payment: ${}\n\
                 Loan Amount: ${}\n\
                 Max Monthly Payment: ${}\n",
                format_whole_dollars(estimate.home_price),
                format_whole_dollars(estimate.down_payment),
                format_whole_dollars(estimate.loan_amount),
                format_amount(estimate.max_monthly_payment),
            ),
        };

        format!("{}{body}", heading(Self::TITLE))
    }
}
