//! Mortgage Simulator - converts between property price, monthly payment and
//! required salary for a fixed-rate amortizing loan
//!
//! This library provides:
//! - Annuity math (installment from principal and principal from installment)
//! - Debt-ratio affordability with rental income and existing loans
//! - Notary fee estimation and breakdown
//! - Three-mode calculator (property, monthly, salary)
//! - Field-level input validation
//! - Batch scenario runs

pub mod error;
pub mod inputs;
pub mod assumptions;
pub mod calculator;
pub mod validation;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use inputs::{CalculationInputs, CalculationMode, SalaryBasis};
pub use assumptions::Assumptions;
pub use calculator::{calculate, CalculationResult, MortgageCalculator};
pub use validation::{Field, ValidationError, Validator};
pub use scenario::ScenarioRunner;
