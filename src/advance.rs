use serde::{Deserialize, Serialize};

use crate::config::AdvancePolicy;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::AdvanceRequest;

/// outcome of a salary advance evaluation
///
/// a decline is a normal result value with a reason, never an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceDecision {
    pub eligible: bool,
    pub approved_amount: Money,
    pub fees: Money,
    pub message: String,
}

impl AdvanceDecision {
    fn declined(message: String) -> Self {
        Self {
            eligible: false,
            approved_amount: Money::ZERO,
            fees: Money::ZERO,
            message,
        }
    }
}

/// evaluate a salary advance request against policy
///
/// approval is all-or-nothing at or below the ceiling; fees are
/// deterministic, never negotiated or waived
pub fn evaluate_advance(request: &AdvanceRequest, policy: &AdvancePolicy) -> Result<AdvanceDecision> {
    request.validate()?;
    policy.validate()?;

    if request.desired_advance_amount <= Money::ZERO {
        return Ok(AdvanceDecision::declined(format!(
            "requested advance amount {} must be positive",
            request.desired_advance_amount
        )));
    }

    let ceiling = policy.ceiling(request.gross_monthly_salary);
    if request.desired_advance_amount > ceiling {
        return Ok(AdvanceDecision::declined(format!(
            "requested advance {} exceeds the ceiling of {} ({}% of gross monthly salary)",
            request.desired_advance_amount,
            ceiling,
            policy.max_advance_fraction.as_percentage()
        )));
    }

    let approved_amount = request.desired_advance_amount;
    let fees = policy.flat_fee + approved_amount * policy.percent_fee.as_decimal();

    Ok(AdvanceDecision {
        eligible: true,
        approved_amount,
        fees,
        message: format!(
            "advance of {} approved with fees of {}",
            approved_amount, fees
        ),
    })
}
