//! Integration tests that write schedules to real files.
//!
//! The unit tests inside csv_export.rs write to in-memory buffers; these
//! check the create-file path end to end against an on-disk fixture.

use std::path::{Path, PathBuf};

use estate_core::AmortizationSchedule;
use estate_ui::csv_export::{self, ExportError};
use estate_ui::state::AppState;
use rust_decimal_macros::dec;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("expected_schedule.csv")
}

/// A path under the temp dir that no other test uses.
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("estate_{}_{name}.csv", std::process::id()))
}

#[test]
fn test_export_matches_fixture() {
    let mut state = AppState::default();
    state.generate_schedule(dec!(10000), dec!(7), 1);
    let path = scratch_path("fixture");

    let rows = state.export_schedule(&path).expect("export should succeed");
    let written = std::fs::read_to_string(&path).expect("exported file is readable");
    let expected = std::fs::read_to_string(fixture_path()).expect("fixture is readable");
    let _ = std::fs::remove_file(&path);

    assert_eq!(rows, 12);
    pretty_assertions::assert_eq!(written, expected);
}

#[test]
fn test_export_full_term_writes_every_month() {
    let mut state = AppState::default();
    state.generate_schedule(dec!(240000), dec!(4.5), 30);
    let path = scratch_path("full_term");

    state.export_schedule(&path).expect("export should succeed");
    let written = std::fs::read_to_string(&path).expect("exported file is readable");
    let _ = std::fs::remove_file(&path);

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 361);
    assert_eq!(lines[0], "#,Payment,Principal,Interest,Balance");
    assert_eq!(lines[1], "1,1216.04,316.04,900.00,239683.96");
    assert!(lines[360].starts_with("360,1216.04,"));
    assert!(lines[360].ends_with(",0.00"));
}

#[test]
fn test_export_overwrites_existing_file() {
    let path = scratch_path("overwrite");
    std::fs::write(&path, "stale contents\n".repeat(100)).expect("scratch file is writable");
    let schedule = estate_core::amortization_schedule(dec!(1200), dec!(12), 1);

    csv_export::export_to_file(&path, &schedule).expect("export should succeed");
    let written = std::fs::read_to_string(&path).expect("exported file is readable");
    let _ = std::fs::remove_file(&path);

    assert!(!written.contains("stale"));
    assert_eq!(written.lines().nth(1), Some("1,106.62,94.62,12.00,1105.38"));
    assert_eq!(written.lines().last(), Some("12,106.62,105.56,1.06,0.00"));
}

#[test]
fn test_export_to_missing_directory_fails_and_keeps_schedule() {
    let mut state = AppState::default();
    state.generate_schedule(dec!(10000), dec!(7), 1);

    let result = state.export_schedule(Path::new("/this/path/does/not/exist/x.csv"));

    assert!(matches!(result, Err(ExportError::Io { .. })));
    assert_eq!(state.last_schedule().map(AmortizationSchedule::len), Some(12));

    // Retrying to a writable location succeeds with the same schedule.
    let path = scratch_path("retry");
    let retried = state.export_schedule(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(retried.ok(), Some(12));
}

#[test]
fn test_export_without_schedule_creates_no_file() {
    let state = AppState::default();
    let path = scratch_path("never_created");

    let result = state.export_schedule(&path);

    assert!(matches!(result, Err(ExportError::EmptySchedule)));
    assert!(!path.exists());
}
