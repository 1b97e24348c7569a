use rust_decimal::Decimal;

use crate::config::AffordabilityPolicy;
use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};
use crate::types::EligibilityContext;

use super::amortization::compound_factor;

/// maximum principal whose level monthly payment fits the income-based
/// debt ceiling
///
/// inverse of the annuity formula: P = M * (1 - (1 + r)^-n) / r, where
/// M is the affordable payment; P = M * n at zero rate
pub fn max_eligible_loan(
    context: &EligibilityContext,
    annual_rate: Rate,
    term_months: u32,
    policy: &AffordabilityPolicy,
) -> Result<Money> {
    context.validate()?;
    policy.validate()?;

    if term_months < 1 {
        return Err(EngineError::InvalidTerm { term_months });
    }

    if annual_rate < Rate::ZERO {
        return Err(EngineError::NegativeRate { rate: annual_rate });
    }

    let affordable = policy.affordable_payment(context.disposable_income()).as_decimal();
    let monthly_rate = annual_rate.monthly().as_decimal();

    let principal = if monthly_rate.is_zero() {
        affordable * Decimal::from(term_months)
    } else {
        let discount = Decimal::ONE / compound_factor(monthly_rate, term_months);
        affordable * (Decimal::ONE - discount) / monthly_rate
    };

    Ok(Money::from_decimal(principal))
}
