use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use estate_ui::{
    logging,
    screens::{
        AboutScreen, AffordabilityForm, AffordabilityScreen, CompareForm, CompareScreen,
        MortgageForm, MortgageScreen, RentalForm, RentalScreen, ScheduleForm, ScheduleScreen,
    },
    settings::Settings,
    state::AppState,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Real estate finance calculator.
///
/// Mortgage payments, affordability, rental returns, property comparison
/// and amortization schedules. Every input has a default, so each command
/// can be run bare to see a worked example.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML settings file with `[policy]` and `[logging]` sections.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `estate_core=trace` (overrides settings).
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(long, global = true)]
    quiet_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly payment for a home purchase.
    Mortgage(MortgageForm),
    /// Most expensive home the income and debts support.
    Affordability(AffordabilityForm),
    /// Cash flow and returns of a rental property.
    Rental(RentalForm),
    /// Cash-on-cash return of two rental properties side by side.
    Compare(CompareForm),
    /// Month-by-month amortization schedule, optionally exported to CSV.
    Schedule(ScheduleForm),
    /// Application name and version.
    About,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        settings.logging.file = Some(file);
    }
    if cli.quiet_log {
        settings.logging.stderr = false;
    }
    logging::apply_settings(&settings.logging).context("failed to configure logging")?;

    debug!(policy = ?settings.policy, "starting");
    let mut state = AppState::new(settings.policy);

    run(cli.command, &mut state, &mut io::stdout().lock())
}

/// Runs one command, writing its screen to `out`.
///
/// The schedule is written before any export is attempted, so a failed
/// export still leaves the table on screen.
fn run(
    command: Command,
    state: &mut AppState,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let output = match command {
        Command::Mortgage(form) => MortgageScreen::show(&form),
        Command::Affordability(form) => {
            AffordabilityScreen::show(&form, &state.affordability_calculator())
        }
        Command::Rental(form) => RentalScreen::show(&form, &state.rental_analysis()),
        Command::Compare(form) => CompareScreen::show(&form, &state.rental_analysis()),
        Command::Schedule(form) => {
            write!(out, "{}", ScheduleScreen::show(&form, state))?;
            out.flush()?;
            if let Some(path) = form.export_path() {
                let message = ScheduleScreen::export(state, &path)
                    .with_context(|| format!("Error exporting file {}", path.display()))?;
                write!(out, "\n{message}")?;
            }
            return Ok(());
        }
        Command::About => AboutScreen::show(),
    };

    write!(out, "{output}")?;
    Ok(())
}
