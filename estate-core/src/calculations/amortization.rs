//! Amortization schedule generation.
//!
//! Each month the interest due on the outstanding balance is charged first;
//! whatever remains of the fixed payment reduces the balance. The final
//! balance is clamped at zero so decimal rounding cannot push it negative.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::max;
use crate::{AmortizationRow, AmortizationSchedule, LoanTerms, MAX_TERM_YEARS};

/// Builds the month-by-month schedule for a loan.
///
/// Returns an empty schedule when the loan amount, rate or term is not
/// positive, interest-free loans included.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estate_core::calculations::{amortization_schedule, common::round_half_up};
///
/// let schedule = amortization_schedule(dec!(240000), dec!(4.5), 30);
///
/// assert_eq!(schedule.len(), 360);
///
/// let first = &schedule.rows()[0];
/// assert_eq!(first.number, 1);
/// assert_eq!(first.interest, dec!(900));
/// assert_eq!(round_half_up(first.principal), dec!(316.04));
///
/// assert!(amortization_schedule(dec!(0), dec!(4.5), 30).is_empty());
/// ```
pub fn amortization_schedule(
    loan: Decimal,
    annual_rate_percent: Decimal,
    years: i32,
) -> AmortizationSchedule {
    if loan <= Decimal::ZERO || annual_rate_percent <= Decimal::ZERO || years <= 0 {
        debug!(
            loan = %loan,
            annual_rate_percent = %annual_rate_percent,
            years,
            "non-positive loan, rate or term; schedule is empty"
        );
        return AmortizationSchedule::default();
    }

    let terms = LoanTerms::new(loan, annual_rate_percent, years);
    if !terms.has_payable_term() {
        warn!(
            years,
            max_years = MAX_TERM_YEARS,
            "loan term too long; schedule is empty"
        );
        return AmortizationSchedule::default();
    }

    let payment = terms.monthly_payment();
    let monthly_rate = terms.monthly_rate();
    let payments = terms.payment_count();

    let Some(rows) = build_rows(loan, payment, monthly_rate, payments) else {
        warn!(
            loan = %loan,
            annual_rate_percent = %annual_rate_percent,
            "schedule arithmetic overflowed; schedule is empty"
        );
        return AmortizationSchedule::default();
    };

    debug!(
        loan = %loan,
        payments,
        payment = %payment,
        "generated amortization schedule"
    );

    AmortizationSchedule::from(rows)
}

/// Splits each payment into interest and principal; `None` on overflow or
/// when no payment could be sized.
fn build_rows(
    loan: Decimal,
    payment: Decimal,
    monthly_rate: Decimal,
    payments: u32,
) -> Option<Vec<AmortizationRow>> {
    if payment.is_zero() {
        return None;
    }

    let mut balance = loan;
    let mut rows = Vec::with_capacity(payments as usize);

    for number in 1..=payments {
        let interest = balance.checked_mul(monthly_rate)?;
        let principal = payment.checked_sub(interest)?;
        balance = max(balance.checked_sub(principal)?, Decimal::ZERO);

        rows.push(AmortizationRow {
            number,
            payment,
            principal,
            interest,
            balance,
        });
    }
    Some(rows)
}
