pub mod calculations;
pub mod models;

pub use calculations::{
    AffordabilityCalculator, RentalAnalysis, amortization_schedule, compare_properties,
    compare_property, estimate_affordability, monthly_payment,
};
pub use models::*;
