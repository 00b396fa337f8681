mod affordability;
mod amortization;
mod finance_policy;
mod loan_terms;
mod property;

pub use affordability::{Affordability, AffordabilityEstimate, AffordabilityInput};
pub use amortization::{AmortizationRow, AmortizationSchedule};
pub use finance_policy::{
    DEFAULT_CLOSING_COST_RATE, DEFAULT_MAX_DEBT_TO_INCOME, FinancePolicy, FinancePolicyError,
};
pub use loan_terms::{LoanTerms, MAX_TERM_YEARS, MONTHS_PER_YEAR};
pub use property::{ComparisonOutcome, PropertyInput, PropertyMetrics, Winner};
