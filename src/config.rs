use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};

/// salary advance policy
///
/// fee schedule and advance ceiling are explicit configuration, never
/// hidden constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancePolicy {
    /// fraction of gross monthly salary available as an advance
    pub max_advance_fraction: Rate,
    /// flat fee charged on every approved advance
    pub flat_fee: Money,
    /// percentage fee charged on the approved amount
    pub percent_fee: Rate,
}

impl Default for AdvancePolicy {
    fn default() -> Self {
        Self {
            max_advance_fraction: Rate::from_decimal(dec!(0.40)),
            flat_fee: Money::from_decimal(dec!(5.00)),
            percent_fee: Rate::from_decimal(dec!(0.02)),
        }
    }
}

impl AdvancePolicy {
    pub fn new(max_advance_fraction: Rate, flat_fee: Money, percent_fee: Rate) -> Result<Self> {
        let policy = Self {
            max_advance_fraction,
            flat_fee,
            percent_fee,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_advance_fraction <= Rate::ZERO || self.max_advance_fraction > Rate::ONE {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "max advance fraction {} outside (0, 1]",
                    self.max_advance_fraction.as_decimal()
                ),
            });
        }

        if self.flat_fee < Money::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: format!("flat fee {} is negative", self.flat_fee),
            });
        }

        if self.percent_fee < Rate::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "percent fee {} is negative",
                    self.percent_fee.as_decimal()
                ),
            });
        }

        Ok(())
    }

    /// advance ceiling for a given gross monthly salary
    pub fn ceiling(&self, gross_monthly_salary: Money) -> Money {
        gross_monthly_salary * self.max_advance_fraction.as_decimal()
    }
}

/// affordability policy for the reverse loan-eligibility calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityPolicy {
    /// debt-to-income ceiling: fraction of disposable income treated as
    /// the maximum affordable monthly loan payment
    pub dti_ceiling: Rate,
}

impl Default for AffordabilityPolicy {
    fn default() -> Self {
        Self {
            dti_ceiling: Rate::from_decimal(dec!(0.40)),
        }
    }
}

impl AffordabilityPolicy {
    pub fn new(dti_ceiling: Rate) -> Result<Self> {
        let policy = Self { dti_ceiling };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dti_ceiling <= Rate::ZERO || self.dti_ceiling > Rate::ONE {
            return Err(EngineError::InvalidDtiCeiling {
                ceiling: self.dti_ceiling,
            });
        }
        Ok(())
    }

    /// maximum affordable monthly payment for a given disposable income
    pub fn affordable_payment(&self, disposable_income: Money) -> Money {
        disposable_income * self.dti_ceiling.as_decimal()
    }
}
