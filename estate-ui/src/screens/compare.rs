use clap::Args;
use estate_core::{ComparisonOutcome, PropertyInput, RentalAnalysis};
use tracing::debug;

use super::heading;
use super::rental::DEFAULT_TERM_YEARS;
use crate::format::format_percent;
use crate::utils::{parse_decimal_or_zero, parse_years};

/// Price, down, rate, rent and expenses for each side.
const FIRST_DEFAULTS: [&str; 5] = ["300000", "60000", "4.5", "2000", "500"];
const SECOND_DEFAULTS: [&str; 5] = ["250000", "50000", "4.5", "1800", "450"];

#[derive(Debug, Clone, Args)]
pub struct CompareForm {
    /// Property 1 price ($)
    #[arg(long, default_value = FIRST_DEFAULTS[0], allow_hyphen_values = true)]
    pub price1: String,
    /// Property 1 down payment ($)
    #[arg(long, default_value = FIRST_DEFAULTS[1], allow_hyphen_values = true)]
    pub down1: String,
    /// Property 1 interest rate (%)
    #[arg(long, default_value = FIRST_DEFAULTS[2], allow_hyphen_values = true)]
    pub rate1: String,
    /// Property 1 monthly rent ($)
    #[arg(long, default_value = FIRST_DEFAULTS[3], allow_hyphen_values = true)]
    pub rent1: String,
    /// Property 1 monthly expenses ($)
    #[arg(long, default_value = FIRST_DEFAULTS[4], allow_hyphen_values = true)]
    pub expenses1: String,

    /// Property 2 price ($)
    #[arg(long, default_value = SECOND_DEFAULTS[0], allow_hyphen_values = true)]
    pub price2: String,
    /// Property 2 down payment ($)
    #[arg(long, default_value = SECOND_DEFAULTS[1], allow_hyphen_values = true)]
    pub down2: String,
    /// Property 2 interest rate (%)
    #[arg(long, default_value = SECOND_DEFAULTS[2], allow_hyphen_values = true)]
    pub rate2: String,
    /// Property 2 monthly rent ($)
    #[arg(long, default_value = SECOND_DEFAULTS[3], allow_hyphen_values = true)]
    pub rent2: String,
    /// Property 2 monthly expenses ($)
    #[arg(long, default_value = SECOND_DEFAULTS[4], allow_hyphen_values = true)]
    pub expenses2: String,

    /// Loan term for both properties (years)
    #[arg(long, default_value = DEFAULT_TERM_YEARS, allow_hyphen_values = true)]
    pub years: String,
}

impl Default for CompareForm {
    fn default() -> Self {
        let [price1, down1, rate1, rent1, expenses1] = FIRST_DEFAULTS.map(String::from);
        let [price2, down2, rate2, rent2, expenses2] = SECOND_DEFAULTS.map(String::from);
        Self {
            price1,
            down1,
            rate1,
            rent1,
            expenses1,
            price2,
            down2,
            rate2,
            rent2,
            expenses2,
            years: DEFAULT_TERM_YEARS.to_string(),
        }
    }
}

impl CompareForm {
    fn property(
        &self,
        fields: [&str; 5],
    ) -> PropertyInput {
        let [price, down, rate, rent, expenses] = fields.map(parse_decimal_or_zero);
        PropertyInput {
            price,
            down_payment: down,
            annual_rate_percent: rate,
            monthly_rent: rent,
            monthly_expenses: expenses,
            years: parse_years(&self.years),
        }
    }

    pub fn first(&self) -> PropertyInput {
        self.property([
            self.price1.as_str(),
            self.down1.as_str(),
            self.rate1.as_str(),
            self.rent1.as_str(),
            self.expenses1.as_str(),
        ])
    }

    pub fn second(&self) -> PropertyInput {
        self.property([
            self.price2.as_str(),
            self.down2.as_str(),
            self.rate2.as_str(),
            self.rent2.as_str(),
            self.expenses2.as_str(),
        ])
    }
}

pub struct CompareScreen;

impl CompareScreen {
    pub const TITLE: &'static str = "Property Comparison";

    pub fn outcome(
        form: &CompareForm,
        analysis: &RentalAnalysis,
    ) -> ComparisonOutcome {
        analysis.compare(&form.first(), &form.second())
    }

    pub fn show(
        form: &CompareForm,
        analysis: &RentalAnalysis,
    ) -> String {
        let outcome = Self::outcome(form, analysis);
        debug!(winner = %outcome.winner, "properties compared");

        format!(
            "{}Property 1 CoC: {}\n\
             Property 2 CoC: {}\n\
             \n\
             Winner: {}\n",
            heading(Self::TITLE),
            format_percent(outcome.first.cash_on_cash_return),
            format_percent(outcome.second.cash_on_cash_return),
            outcome.winner,
        )
    }
}
