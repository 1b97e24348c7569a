pub mod affordability;
pub mod amortization;

use serde::{Deserialize, Serialize};

use crate::config::AffordabilityPolicy;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{EligibilityContext, LoanRequest};

pub use affordability::max_eligible_loan;
pub use amortization::{AmortizationRow, AmortizationSchedule};

/// complete loan calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_repayment: Money,
    pub total_interest: Money,
    pub schedule: Vec<AmortizationRow>,
    /// income-capped maximum principal, present only when an eligibility
    /// context was supplied
    pub max_eligible_loan: Option<Money>,
}

/// amortize a loan request
pub fn compute_loan(request: &LoanRequest) -> Result<LoanResult> {
    let schedule = AmortizationSchedule::generate(request)?;

    Ok(LoanResult {
        monthly_payment: schedule.monthly_payment,
        total_repayment: schedule.total_repayment,
        total_interest: schedule.total_interest,
        schedule: schedule.rows,
        max_eligible_loan: None,
    })
}

/// amortize and additionally report the maximum eligible principal,
/// reusing the request's own rate and term for the reverse direction
pub fn compute_loan_with_context(
    request: &LoanRequest,
    context: &EligibilityContext,
    policy: &AffordabilityPolicy,
) -> Result<LoanResult> {
    let mut result = compute_loan(request)?;
    result.max_eligible_loan = Some(max_eligible_loan(
        context,
        request.annual_rate,
        request.term_months,
        policy,
    )?);
    Ok(result)
}
