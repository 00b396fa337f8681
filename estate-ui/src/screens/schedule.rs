use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use estate_core::AmortizationSchedule;

use super::heading;
use crate::csv_export::{ExportError, default_file_name};
use crate::format::format_amount;
use crate::state::AppState;
use crate::utils::{parse_decimal_or_zero, parse_years};

/// Number of payments shown on screen; export writes them all.
pub const PREVIEW_ROWS: usize = 24;

const DEFAULT_LOAN: &str = "240000";
const DEFAULT_RATE: &str = "4.5";
const DEFAULT_YEARS: &str = "30";

#[derive(Debug, Clone, Args)]
pub struct ScheduleForm {
    /// Loan amount ($)
    #[arg(long, default_value = DEFAULT_LOAN, allow_hyphen_values = true)]
    pub loan: String,

    /// Interest rate (%)
    #[arg(long, default_value = DEFAULT_RATE, allow_hyphen_values = true)]
    pub rate: String,

    /// Loan term (years)
    #[arg(long, default_value = DEFAULT_YEARS, allow_hyphen_values = true)]
    pub years: String,

    /// Export the full schedule as CSV, to PATH or to a timestamped file
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            loan: DEFAULT_LOAN.to_string(),
            rate: DEFAULT_RATE.to_string(),
            years: DEFAULT_YEARS.to_string(),
            export: None,
        }
    }
}

impl ScheduleForm {
    /// Where to export, if requested: the given path or
    /// `amort_YYYYMMDD_HHMMSS.csv` in the working directory.
    pub fn export_path(&self) -> Option<PathBuf> {
        self.export.as_ref().map(|path| {
            path.clone()
                .unwrap_or_else(|| PathBuf::from(default_file_name(&Local::now())))
        })
    }
}

fn preview_table(schedule: &AmortizationSchedule) -> String {
    let mut table = format!(
        "{:<6} {:<12} {:<12} {:<12} {:<12}\n",
        "Month", "Payment", "Principal", "Interest", "Balance"
    );
    table.push_str(&"=".repeat(60));
    table.push('\n');

    for row in schedule.preview(PREVIEW_ROWS) {
        table.push_str(&format!(
            "{:<6} {:<12} {:<12} {:<12} {:<12}\n",
            row.number,
            format_amount(row.payment),
            format_amount(row.principal),
            format_amount(row.interest),
            format_amount(row.balance),
        ));
    }
    table
}

pub struct ScheduleScreen;

impl ScheduleScreen {
    pub const TITLE: &'static str = "Amortization Schedule (First 24 payments)";

    /// Generates the schedule into `state` and renders its first rows.
    pub fn show(
        form: &ScheduleForm,
        state: &mut AppState,
    ) -> String {
        let schedule = state.generate_schedule(
            parse_decimal_or_zero(&form.loan),
            parse_decimal_or_zero(&form.rate),
            parse_years(&form.years),
        );

        format!("{}{}", heading(Self::TITLE), preview_table(schedule))
    }

    /// Writes the schedule held in `state` and returns the confirmation.
    pub fn export(
        state: &AppState,
        path: &Path,
    ) -> Result<String, ExportError> {
        let rows = state.export_schedule(path)?;
        Ok(format!(
            "Schedule exported successfully! ({rows} payments to {})\n",
            path.display()
        ))
    }
}
