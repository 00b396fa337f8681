//! CSV export for amortization schedules.
//!
//! ## CSV Format
//!
//! One header line followed by one line per monthly payment, in payment
//! order. Amounts are rounded half-up to exactly two decimal places and are
//! written without thousands separators or currency symbols.
//!
//! | Column      | Type    | Notes                                  |
//! |-------------|---------|----------------------------------------|
//! | `#`         | integer | 1-based payment number                 |
//! | `Payment`   | decimal | Fixed monthly payment                  |
//! | `Principal` | decimal | Portion of the payment reducing balance|
//! | `Interest`  | decimal | Portion of the payment charged interest|
//! | `Balance`   | decimal | Balance after the payment, never < 0   |
//!
//! ### Example
//!
//! ```csv
//! #,Payment,Principal,Interest,Balance
//! 1,865.27,806.93,58.33,9193.07
//! 2,865.27,811.64,53.63,8381.42
//! ```
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use chrono::{DateTime, TimeZone};
use estate_core::{AmortizationRow, AmortizationSchedule};
use tracing::info;

use crate::format::format_amount;

/// Header line of every exported schedule.
pub const CSV_HEADER: [&str; 5] = ["#", "Payment", "Principal", "Interest", "Balance"];

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while exporting a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// There is nothing to export: no schedule was generated, or the inputs
    /// produced an empty one.
    #[error("Please generate schedule first!")]
    EmptySchedule,

    /// The destination could not be created or written.
    #[error("cannot write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The CSV writer failed mid-stream.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Core writer
// ---------------------------------------------------------------------------

/// Convert a single schedule row into its CSV cells.
fn row_record(row: &AmortizationRow) -> [String; 5] {
    [
        row.number.to_string(),
        format_amount(row.payment),
        format_amount(row.principal),
        format_amount(row.interest),
        format_amount(row.balance),
    ]
}

/// Write `schedule` as CSV to any writer and return the number of data rows.
///
/// # Errors
///
/// * [ExportError::EmptySchedule] – if the schedule has no rows.
/// * [ExportError::Csv] – if the underlying writer fails.
pub fn write_schedule<W: Write>(
    writer: W,
    schedule: &AmortizationSchedule,
) -> Result<usize, ExportError> {
    if schedule.is_empty() {
        return Err(ExportError::EmptySchedule);
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for row in schedule {
        wtr.write_record(row_record(row))?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    Ok(schedule.len())
}

/// Convenience wrapper: create (or truncate) `path` and delegate to
/// [write_schedule].
///
/// The schedule is only read, so a failed export can simply be retried.
pub fn export_to_file(
    path: &Path,
    schedule: &AmortizationSchedule,
) -> Result<usize, ExportError> {
    if schedule.is_empty() {
        return Err(ExportError::EmptySchedule);
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rows = write_schedule(file, schedule)?;

    info!(path = %path.display(), rows, "exported amortization schedule");
    Ok(rows)
}

/// Suggested file name for an export made at `now`, e.g.
/// `amort_20261017_093005.csv`.
pub fn default_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("amort_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};
    use estate_core::amortization_schedule;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn export_to_string(schedule: &AmortizationSchedule) -> String {
        let mut buffer = Vec::new();
        write_schedule(&mut buffer, schedule).expect("export should succeed");
        String::from_utf8(buffer).expect("CSV output is UTF-8")
    }

    // -----------------------------------------------------------------------
    // 1. Header and row count
    // -----------------------------------------------------------------------
    #[test]
    fn test_header_is_first_line() {
        let csv = export_to_string(&amortization_schedule(dec!(10000), dec!(7), 1));

        assert_eq!(csv.lines().next(), Some("#,Payment,Principal,Interest,Balance"));
    }

    #[test]
    fn test_one_line_per_month_plus_header() {
        let schedule = amortization_schedule(dec!(240000), dec!(4.5), 30);

        let mut buffer = Vec::new();
        let rows = write_schedule(&mut buffer, &schedule).expect("export should succeed");
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(rows, 360);
        assert_eq!(csv.lines().count(), 361);
    }

    // -----------------------------------------------------------------------
    // 2. Row formatting
    // -----------------------------------------------------------------------
    #[test]
    fn test_first_rows_are_rounded_to_cents() {
        let csv = export_to_string(&amortization_schedule(dec!(10000), dec!(7), 1));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[1], "1,865.27,806.93,58.33,9193.07");
        assert_eq!(lines[2], "2,865.27,811.64,53.63,8381.42");
    }

    #[test]
    fn test_last_row_has_zero_balance() {
        let csv = export_to_string(&amortization_schedule(dec!(10000), dec!(7), 1));

        assert_eq!(csv.lines().last(), Some("12,865.27,860.25,5.02,0.00"));
    }

    #[test]
    fn test_lines_end_with_newline_only() {
        let csv = export_to_string(&amortization_schedule(dec!(10000), dec!(7), 1));

        assert!(!csv.contains('\r'));
        assert!(csv.ends_with('\n'));
    }

    // -----------------------------------------------------------------------
    // 3. Errors
    // -----------------------------------------------------------------------
    #[test]
    fn test_empty_schedule_is_rejected() {
        let mut buffer = Vec::new();
        let result = write_schedule(&mut buffer, &AmortizationSchedule::default());

        match result {
            Err(ExportError::EmptySchedule) => { /* expected */ }
            other => panic!("expected EmptySchedule, got {:?}", other),
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_empty_schedule_message_asks_for_generation() {
        assert_eq!(
            ExportError::EmptySchedule.to_string(),
            "Please generate schedule first!"
        );
    }

    #[test]
    fn test_unwritable_path_returns_io_error() {
        let schedule = amortization_schedule(dec!(10000), dec!(7), 1);
        let result = export_to_file(Path::new("/this/path/does/not/exist.csv"), &schedule);

        match result {
            Err(ExportError::Io { path, .. }) => {
                assert_eq!(path, "/this/path/does/not/exist.csv");
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 4. Default file name
    // -----------------------------------------------------------------------
    #[test]
    fn test_default_file_name_uses_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 5).unwrap();

        assert_eq!(default_file_name(&at), "amort_20261017_093005.csv");
    }

    #[test]
    fn test_default_file_name_for_local_time_has_csv_extension() {
        let name = default_file_name(&Local::now());

        assert!(name.starts_with("amort_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "amort_YYYYMMDD_HHMMSS.csv".len());
    }
}
