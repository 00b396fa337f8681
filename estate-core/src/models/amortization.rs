use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based payment sequence number.
    pub number: u32,
    /// Scheduled payment for the month (identical on every row).
    pub payment: Decimal,
    /// Portion of the payment that reduces the balance.
    pub principal: Decimal,
    /// Portion of the payment charged as interest.
    pub interest: Decimal,
    /// Balance remaining after this payment, never negative.
    pub balance: Decimal,
}

/// Month-by-month breakdown of a loan, in payment order.
///
/// Produced by [`amortization_schedule`](crate::calculations::amortization_schedule);
/// an empty schedule means the inputs were degenerate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AmortizationRow> {
        self.rows.iter()
    }

    /// The first `count` rows, or the whole schedule if it is shorter.
    pub fn preview(
        &self,
        count: usize,
    ) -> &[AmortizationRow] {
        &self.rows[..count.min(self.rows.len())]
    }

    /// Fixed monthly payment, or `None` for an empty schedule.
    pub fn monthly_payment(&self) -> Option<Decimal> {
        self.rows.first().map(|row| row.payment)
    }

    /// Balance after the last payment, or `None` for an empty schedule.
    pub fn final_balance(&self) -> Option<Decimal> {
        self.rows.last().map(|row| row.balance)
    }

    pub fn total_principal(&self) -> Decimal {
        self.rows.iter().map(|row| row.principal).sum()
    }

    pub fn total_interest(&self) -> Decimal {
        self.rows.iter().map(|row| row.interest).sum()
    }

    pub fn total_paid(&self) -> Decimal {
        self.rows.iter().map(|row| row.payment).sum()
    }
}

impl From<Vec<AmortizationRow>> for AmortizationSchedule {
    fn from(rows: Vec<AmortizationRow>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a AmortizationRow;
    type IntoIter = std::slice::Iter<'a, AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn two_month_schedule() -> AmortizationSchedule {
        AmortizationSchedule::from(vec![
            AmortizationRow {
                number: 1,
                payment: dec!(505.00),
                principal: dec!(495.00),
                interest: dec!(10.00),
                balance: dec!(505.00),
            },
            AmortizationRow {
                number: 2,
                payment: dec!(505.00),
                principal: dec!(500.00),
                interest: dec!(5.00),
                balance: dec!(5.00),
            },
        ])
    }

    #[test]
    fn default_schedule_is_empty() {
        let schedule = AmortizationSchedule::default();

        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
        assert_eq!(schedule.monthly_payment(), None);
        assert_eq!(schedule.final_balance(), None);
        assert_eq!(schedule.total_paid(), Decimal::ZERO);
    }

    #[test]
    fn totals_sum_each_column() {
        let schedule = two_month_schedule();

        assert_eq!(schedule.total_principal(), dec!(995.00));
        assert_eq!(schedule.total_interest(), dec!(15.00));
        assert_eq!(schedule.total_paid(), dec!(1010.00));
    }

    #[test]
    fn preview_truncates_to_available_rows() {
        let schedule = two_month_schedule();

        assert_eq!(schedule.preview(1).len(), 1);
        assert_eq!(schedule.preview(24).len(), 2);
        assert_eq!(schedule.preview(0).len(), 0);
    }

    #[test]
    fn first_and_last_row_accessors() {
        let schedule = two_month_schedule();

        assert_eq!(schedule.monthly_payment(), Some(dec!(505.00)));
        assert_eq!(schedule.final_balance(), Some(dec!(5.00)));
    }

    #[test]
    fn iterates_in_payment_order() {
        let schedule = two_month_schedule();

        let numbers: Vec<u32> = (&schedule).into_iter().map(|row| row.number).collect();

        assert_eq!(numbers, vec![1, 2]);
    }
}
