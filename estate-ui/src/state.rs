//! Application state shared by the calculator screens.
//!
//! The only value that outlives a single calculation is the most recently
//! generated amortization schedule, which the export action writes out.

use std::path::Path;

use estate_core::{
    AffordabilityCalculator, AmortizationSchedule, FinancePolicy, RentalAnalysis,
    amortization_schedule,
};
use rust_decimal::Decimal;
use tracing::debug;

use crate::csv_export::{self, ExportError};

/// Session state: the finance policy in force and the last schedule shown.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    policy: FinancePolicy,

    /// Replaced on every generation, including by an empty schedule when
    /// the inputs were degenerate.
    last_schedule: Option<AmortizationSchedule>,
}

impl AppState {
    pub fn new(policy: FinancePolicy) -> Self {
        Self {
            policy,
            last_schedule: None,
        }
    }

    pub fn policy(&self) -> &FinancePolicy {
        &self.policy
    }

    pub fn rental_analysis(&self) -> RentalAnalysis {
        RentalAnalysis::new(self.policy)
    }

    pub fn affordability_calculator(&self) -> AffordabilityCalculator {
        AffordabilityCalculator::new(self.policy)
    }

    /// Builds a schedule and keeps it as the export candidate.
    pub fn generate_schedule(
        &mut self,
        loan_amount: Decimal,
        annual_rate_percent: Decimal,
        years: i32,
    ) -> &AmortizationSchedule {
        let schedule = amortization_schedule(loan_amount, annual_rate_percent, years);
        debug!(rows = schedule.len(), "schedule generated");
        self.last_schedule.insert(schedule)
    }

    pub fn last_schedule(&self) -> Option<&AmortizationSchedule> {
        self.last_schedule.as_ref()
    }

    /// Writes the last generated schedule to `path`.
    ///
    /// # Errors
    ///
    /// [ExportError::EmptySchedule] when nothing (or only an empty schedule)
    /// has been generated; I/O and CSV failures otherwise. The stored
    /// schedule is left untouched either way.
    pub fn export_schedule(
        &self,
        path: &Path,
    ) -> Result<usize, ExportError> {
        match &self.last_schedule {
            Some(schedule) => csv_export::export_to_file(path, schedule),
            None => Err(ExportError::EmptySchedule),
        }
    }

    pub fn clear_schedule(&mut self) {
        self.last_schedule = None;
    }
}
