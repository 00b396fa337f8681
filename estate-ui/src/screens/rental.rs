use clap::Args;
use estate_core::{PropertyInput, RentalAnalysis};
use tracing::debug;

use super::heading;
use crate::format::{format_currency, format_percent};
use crate::utils::{parse_decimal_or_zero, parse_years};

const DEFAULT_PRICE: &str = "300000";
const DEFAULT_DOWN: &str = "75000";
const DEFAULT_RATE: &str = "5";
const DEFAULT_RENT: &str = "2000";
const DEFAULT_EXPENSES: &str = "400";
pub(crate) const DEFAULT_TERM_YEARS: &str = "30";

#[derive(Debug, Clone, Args)]
pub struct RentalForm {
    /// Purchase price ($)
    #[arg(long, default_value = DEFAULT_PRICE, allow_hyphen_values = true)]
    pub price: String,

    /// Down payment ($)
    #[arg(long, default_value = DEFAULT_DOWN, allow_hyphen_values = true)]
    pub down: String,

    /// Interest rate (%)
    #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
    pub rate: String,

    /// Monthly rent ($)
    #[arg(long, default_value = DEFAULT_RENT, allow_hyphen_values = true)]
    pub rent: String,

    /// Monthly expenses ($)
    #[arg(long, default_value = DEFAULT_EXPENSES, allow_hyphen_values = true)]
    pub expenses: String,

    /// Loan term (years)
    #[arg(long, default_value = DEFAULT_TERM_YEARS, allow_hyphen_values = true)]
    pub years: String,
}

impl Default for RentalForm {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE.to_string(),
            down: DEFAULT_DOWN.to_string(),
            rate: DEFAULT_RATE.to_string(),
            rent: DEFAULT_RENT.to_string(),
            expenses: DEFAULT_EXPENSES.to_string(),
            years: DEFAULT_TERM_YEARS.to_string(),
        }
    }
}

impl RentalForm {
    pub fn input(&self) -> PropertyInput {
        PropertyInput {
            price: parse_decimal_or_zero(&self.price),
            down_payment: parse_decimal_or_zero(&self.down),
            annual_rate_percent: parse_decimal_or_zero(&self.rate),
            monthly_rent: parse_decimal_or_zero(&self.rent),
            monthly_expenses: parse_decimal_or_zero(&self.expenses),
            years: parse_years(&self.years),
        }
    }
}

pub struct RentalScreen;

impl RentalScreen {
    pub const TITLE: &'static str = "Rental ROI Calculator";

    pub fn show(
        form: &RentalForm,
        analysis: &RentalAnalysis,
    ) -> String {
        let metrics = analysis.calculate(&form.input());
        debug!(?metrics, "rental analysed");

        format!(
            "{}Monthly Cash Flow: ${}\n\
             Cash-on-Cash Return: {}\n\
             Capitalization Rate: {}\n\
             Total Investment: ${}\n",
            heading(Self::TITLE),
            format_currency(metrics.monthly_cash_flow),
            format_percent(metrics.cash_on_cash_return),
            format_percent(metrics.cap_rate),
            format_currency(metrics.total_investment),
        )
    }
}
