use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};

/// how often the applicant is paid
///
/// informational only: all arithmetic is monthly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

/// fixed-rate installment loan request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
}

impl LoanRequest {
    /// create a validated request; invalid parameters are rejected here,
    /// never clamped or coerced
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Self> {
        let request = Self {
            principal,
            annual_rate,
            term_months,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal <= Money::ZERO {
            return Err(EngineError::InvalidPrincipal {
                principal: self.principal,
            });
        }

        if self.term_months < 1 {
            return Err(EngineError::InvalidTerm {
                term_months: self.term_months,
            });
        }

        if self.annual_rate < Rate::ZERO {
            return Err(EngineError::NegativeRate {
                rate: self.annual_rate,
            });
        }

        Ok(())
    }
}

/// borrower income facts for the reverse eligibility calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityContext {
    pub gross_salary: Money,
    pub deductions: Money,
}

impl EligibilityContext {
    pub fn new(gross_salary: Money, deductions: Money) -> Result<Self> {
        let context = Self {
            gross_salary,
            deductions,
        };
        context.validate()?;
        Ok(context)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gross_salary <= Money::ZERO {
            return Err(EngineError::InvalidSalary {
                salary: self.gross_salary,
            });
        }

        if self.deductions < Money::ZERO || self.deductions >= self.gross_salary {
            return Err(EngineError::InvalidDeductions {
                deductions: self.deductions,
                gross_salary: self.gross_salary,
            });
        }

        Ok(())
    }

    /// salary remaining after deductions
    pub fn disposable_income(&self) -> Money {
        self.gross_salary - self.deductions
    }
}

/// salary advance request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvanceRequest {
    pub gross_monthly_salary: Money,
    pub pay_frequency: PayFrequency,
    pub desired_advance_amount: Money,
}

impl AdvanceRequest {
    /// a non-positive desired amount is a policy decline rather than a
    /// construction error, so only the salary is a precondition here
    pub fn new(
        gross_monthly_salary: Money,
        pay_frequency: PayFrequency,
        desired_advance_amount: Money,
    ) -> Result<Self> {
        let request = Self {
            gross_monthly_salary,
            pay_frequency,
            desired_advance_amount,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gross_monthly_salary <= Money::ZERO {
            return Err(EngineError::InvalidSalary {
                salary: self.gross_monthly_salary,
            });
        }
        Ok(())
    }
}
