//! Real-estate finance calculations.
//!
//! Every function here is pure and infallible: degenerate inputs (zero or
//! negative amounts, terms or rates) produce zero or empty results instead
//! of errors.

pub mod common;

mod affordability;
mod amortization;
mod mortgage;
mod rental;

pub use affordability::{AffordabilityCalculator, estimate_affordability};
pub use amortization::amortization_schedule;
pub use mortgage::monthly_payment;
pub use rental::{RentalAnalysis, compare_properties, compare_property};
