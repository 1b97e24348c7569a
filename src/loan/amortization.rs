use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::LoanRequest;

/// one month of the repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub starting_balance: Money,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
}

/// full repayment schedule with totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<AmortizationRow>,
    pub monthly_payment: Money,
    pub total_repayment: Money,
    pub total_interest: Money,
}

impl AmortizationSchedule {
    /// generate the month-by-month schedule
    ///
    /// the recurrence runs on unrounded decimals; rows carry the rounded
    /// display values. the last row always absorbs the full remaining
    /// balance so the schedule ends at exactly zero.
    pub fn generate(request: &LoanRequest) -> Result<Self> {
        request.validate()?;

        let principal = request.principal.as_decimal();
        let monthly_rate = request.annual_rate.monthly().as_decimal();
        let term = request.term_months;
        let payment = annuity_payment(principal, monthly_rate, term);

        let mut rows = Vec::with_capacity(term as usize);
        let mut balance = principal;
        let mut total_repayment = Decimal::ZERO;

        for month in 1..=term {
            let interest = balance * monthly_rate;

            let (row_payment, ending) = if month == term {
                // final-row correction: pay off whatever is left
                (balance + interest, Decimal::ZERO)
            } else {
                let principal_portion = payment - interest;
                (payment, balance - principal_portion)
            };

            total_repayment += row_payment;

            let starting_balance = Money::from_decimal(balance);
            let ending_balance = Money::from_decimal(ending);

            rows.push(AmortizationRow {
                month,
                starting_balance,
                payment: Money::from_decimal(row_payment),
                // difference of the rounded balances, so principal portions
                // telescope to the principal exactly
                principal_portion: starting_balance - ending_balance,
                interest_portion: Money::from_decimal(interest),
                ending_balance,
            });

            balance = ending;
        }

        let total_interest = total_repayment - principal;

        Ok(Self {
            rows,
            monthly_payment: Money::from_decimal(payment),
            total_repayment: Money::from_decimal(total_repayment),
            total_interest: Money::from_decimal(total_interest),
        })
    }

    /// get the row for a specific month (1-indexed)
    pub fn row(&self, month: u32) -> Option<&AmortizationRow> {
        self.rows.get((month as usize).checked_sub(1)?)
    }
}

/// level payment for a monthly-compounding fixed-rate loan
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1); the zero-rate branch is
/// mandatory since the formula divides by r
pub(crate) fn annuity_payment(principal: Decimal, monthly_rate: Decimal, term_months: u32) -> Decimal {
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let compound = compound_factor(monthly_rate, term_months);
    principal * monthly_rate * compound / (compound - Decimal::ONE)
}

/// (1 + r)^n by repeated multiplication
pub(crate) fn compound_factor(monthly_rate: Decimal, periods: u32) -> Decimal {
    let base = Decimal::ONE + monthly_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn request(principal: i64, rate_percent: Decimal, term: u32) -> LoanRequest {
        LoanRequest::new(
            Money::from_major(principal),
            Rate::from_percentage(rate_percent),
            term,
        )
        .unwrap()
    }

    #[test]
    fn test_standard_scenario() {
        // 5,000 at 5% over 12 months
        let schedule = AmortizationSchedule::generate(&request(5000, dec!(5.0), 12)).unwrap();

        assert_eq!(schedule.rows.len(), 12);
        assert_eq!(schedule.monthly_payment, Money::from_decimal(dec!(428.04)));

        let expected_total = dec!(5136.48);
        assert!((schedule.total_repayment.as_decimal() - expected_total).abs() <= dec!(0.10));
        assert!((schedule.total_interest.as_decimal() - dec!(136.48)).abs() <= dec!(0.10));
    }

    #[test]
    fn test_first_row_starts_at_principal() {
        let schedule = AmortizationSchedule::generate(&request(5000, dec!(5.0), 12)).unwrap();
        assert_eq!(schedule.rows[0].starting_balance, Money::from_major(5000));
        assert_eq!(schedule.rows[0].month, 1);
    }

    #[test]
    fn test_schedule_ends_at_exactly_zero() {
        for term in [1, 6, 12, 60, 360] {
            let schedule =
                AmortizationSchedule::generate(&request(250_000, dec!(7.25), term)).unwrap();
            assert_eq!(schedule.rows.len(), term as usize);
            assert_eq!(schedule.rows.last().unwrap().ending_balance, Money::ZERO);
        }
    }

    #[test]
    fn test_rows_chain_and_principal_sums() {
        let schedule = AmortizationSchedule::generate(&request(10_000, dec!(9.5), 48)).unwrap();

        let mut principal_sum = Money::ZERO;
        for (i, row) in schedule.rows.iter().enumerate() {
            assert_eq!(row.month, (i + 1) as u32);
            assert_eq!(row.ending_balance, row.starting_balance - row.principal_portion);
            if i > 0 {
                assert_eq!(row.starting_balance, schedule.rows[i - 1].ending_balance);
            }
            principal_sum += row.principal_portion;
        }

        // principal portions telescope to the principal exactly
        assert_eq!(principal_sum, Money::from_major(10_000));
    }

    #[test]
    fn test_payments_sum_to_total_repayment() {
        let schedule = AmortizationSchedule::generate(&request(10_000, dec!(9.5), 48)).unwrap();

        let mut payment_sum = Money::ZERO;
        for row in &schedule.rows {
            payment_sum += row.payment;
        }

        let drift = (payment_sum - schedule.total_repayment).abs();
        assert!(drift <= Money::from_decimal(dec!(0.50)), "drift {}", drift);

        assert_eq!(
            schedule.total_interest,
            schedule.total_repayment - Money::from_major(10_000)
        );
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let schedule = AmortizationSchedule::generate(&request(1200, dec!(0), 12)).unwrap();

        assert_eq!(schedule.monthly_payment, Money::from_major(100));
        assert_eq!(schedule.total_repayment, Money::from_major(1200));
        assert_eq!(schedule.total_interest, Money::ZERO);

        for row in &schedule.rows {
            assert_eq!(row.interest_portion, Money::ZERO);
            assert_eq!(row.payment, Money::from_major(100));
        }
    }

    #[test]
    fn test_single_month_term() {
        let schedule = AmortizationSchedule::generate(&request(5000, dec!(5.0), 1)).unwrap();

        assert_eq!(schedule.rows.len(), 1);
        let row = &schedule.rows[0];
        assert_eq!(row.principal_portion, Money::from_major(5000));
        assert_eq!(row.ending_balance, Money::ZERO);
        assert_eq!(row.payment, row.principal_portion + row.interest_portion);
    }

    #[test]
    fn test_near_zero_rate_uses_annuity_branch() {
        // 0.01% annual is tiny but not zero, so interest must accrue
        let schedule = AmortizationSchedule::generate(&request(5000, dec!(0.01), 12)).unwrap();

        assert!(schedule.total_interest > Money::ZERO);
        assert!(schedule.monthly_payment >= Money::from_decimal(dec!(5000) / dec!(12)));
    }

    #[test]
    fn test_interest_increases_with_rate() {
        let low = AmortizationSchedule::generate(&request(5000, dec!(5.0), 12)).unwrap();
        let mid = AmortizationSchedule::generate(&request(5000, dec!(10.0), 12)).unwrap();
        let high = AmortizationSchedule::generate(&request(5000, dec!(15.0), 12)).unwrap();

        assert!(low.total_interest < mid.total_interest);
        assert!(mid.total_interest < high.total_interest);
    }

    #[test]
    fn test_idempotent() {
        let req = request(7500, dec!(11.75), 36);
        let a = AmortizationSchedule::generate(&req).unwrap();
        let b = AmortizationSchedule::generate(&req).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_lookup() {
        let schedule = AmortizationSchedule::generate(&request(5000, dec!(5.0), 12)).unwrap();
        assert_eq!(schedule.row(1).unwrap().month, 1);
        assert_eq!(schedule.row(12).unwrap().month, 12);
        assert!(schedule.row(0).is_none());
        assert!(schedule.row(13).is_none());
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(Decimal::ZERO, 12), Decimal::ONE);
        assert_eq!(compound_factor(dec!(0.01), 1), dec!(1.01));
        assert_eq!(compound_factor(dec!(0.01), 2), dec!(1.0201));
    }
}
