use clap::Args;
use estate_core::monthly_payment;
use rust_decimal::Decimal;
use tracing::debug;

use super::heading;
use crate::format::format_currency;
use crate::utils::{parse_decimal_or_zero, parse_years};

const DEFAULT_PRICE: &str = "300000";
const DEFAULT_DOWN: &str = "60000";
const DEFAULT_RATE: &str = "4.5";
const DEFAULT_YEARS: &str = "30";

#[derive(Debug, Clone, Args)]
pub struct MortgageForm {
    /// Home price ($)
    #[arg(long, default_value = DEFAULT_PRICE, allow_hyphen_values = true)]
    pub price: String,

    /// Down payment ($)
    #[arg(long, default_value = DEFAULT_DOWN, allow_hyphen_values = true)]
    pub down: String,

    /// Interest rate (%)
    #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
    pub rate: String,

    /// Loan term (years)
    #[arg(long, default_value = DEFAULT_YEARS, allow_hyphen_values = true)]
    pub years: String,
}

impl Default for MortgageForm {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE.to_string(),
            down: DEFAULT_DOWN.to_string(),
            rate: DEFAULT_RATE.to_string(),
            years: DEFAULT_YEARS.to_string(),
        }
    }
}

impl MortgageForm {
    /// Monthly payment on the price less the down payment.
    pub fn payment(&self) -> Decimal {
        let loan = parse_decimal_or_zero(&self.price) - parse_decimal_or_zero(&self.down);
        monthly_payment(
            loan,
            parse_decimal_or_zero(&self.rate),
            parse_years(&self.years),
        )
    }
}

pub struct MortgageScreen;

impl MortgageScreen {
    pub const TITLE: &'static str = "Mortgage Calculator";

    pub fn show(form: &MortgageForm) -> String {
        let payment = form.payment();
        debug!(%payment, "mortgage calculated");

        format!(
            "{}Monthly Payment: ${}\n",
            heading(Self::TITLE),
            format_currency(payment)
        )
    }
}
