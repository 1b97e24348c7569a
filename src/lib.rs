pub mod advance;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod loan;
pub mod types;

// re-export key types
pub use advance::{evaluate_advance, AdvanceDecision};
pub use config::{AdvancePolicy, AffordabilityPolicy};
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use loan::{
    compute_loan, compute_loan_with_context, max_eligible_loan, AmortizationRow,
    AmortizationSchedule, LoanResult,
};
pub use types::{AdvanceRequest, EligibilityContext, LoanRequest, PayFrequency};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
