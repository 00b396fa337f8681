//! One screen per calculator.
//!
//! Each screen pairs a form (command-line arguments, every field text with
//! a default) with a `show` function that runs the calculation and renders
//! the result block printed to stdout.

mod about;
mod affordability;
mod compare;
mod mortgage;
mod rental;
mod schedule;

pub use about::AboutScreen;
pub use affordability::{AffordabilityForm, AffordabilityScreen};
pub use compare::{CompareForm, CompareScreen};
pub use mortgage::{MortgageForm, MortgageScreen};
pub use rental::{RentalForm, RentalScreen};
pub use schedule::{PREVIEW_ROWS, ScheduleForm, ScheduleScreen};

/// Title line followed by a rule of the same width.
fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "-".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_is_underlined_to_title_width() {
        assert_eq!(heading("Mortgage Calculator"), "Mortgage Calculator\n-------------------\n");
    }
}
