use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid principal: {principal} (must be positive)")]
    InvalidPrincipal {
        principal: Money,
    },

    #[error("invalid term: {term_months} months (must be at least 1)")]
    InvalidTerm {
        term_months: u32,
    },

    #[error("invalid interest rate: {rate} (must not be negative)")]
    NegativeRate {
        rate: Rate,
    },

    #[error("invalid gross salary: {salary} (must be positive)")]
    InvalidSalary {
        salary: Money,
    },

    #[error("invalid deductions: {deductions} (must be non-negative and below gross salary {gross_salary})")]
    InvalidDeductions {
        deductions: Money,
        gross_salary: Money,
    },

    #[error("invalid dti ceiling: {ceiling} (must be within (0, 1])")]
    InvalidDtiCeiling {
        ceiling: Rate,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
