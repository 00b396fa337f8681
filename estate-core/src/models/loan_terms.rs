use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly payments in one year of a loan term.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest term, in years, that the calculations accept. Longer terms are
/// treated like a non-positive term: no payment and an empty schedule.
pub const MAX_TERM_YEARS: i32 = 100;

/// Parameters of a fixed-rate, fully amortizing loan.
///
/// The rate is an annual percentage (`4.5` means 4.5% a year), matching how
/// users type it. Nothing here is validated; calculations treat a
/// non-positive principal, or a term outside `1..=MAX_TERM_YEARS`, as a
/// degenerate zero-payment loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub years: i32,
}

impl LoanTerms {
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        years: i32,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
        }
    }

    /// Periodic monthly rate as a fraction (4.5% a year becomes 0.00375).
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR)
    }

    /// Whether the term lies within `1..=MAX_TERM_YEARS`.
    pub fn has_payable_term(&self) -> bool {
        (1..=MAX_TERM_YEARS).contains(&self.years)
    }

    /// Number of monthly payments over the term, zero when the term is not
    /// payable.
    pub fn payment_count(&self) -> u32 {
        if !self.has_payable_term() {
            return 0;
        }
        self.years.unsigned_abs() * MONTHS_PER_YEAR
    }
}
