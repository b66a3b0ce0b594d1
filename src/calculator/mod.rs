//! Mortgage calculation: annuity math, debt-ratio affordability and the
//! three-mode calculator built on them

pub mod annuity;
mod affordability;
mod engine;
mod result;

pub use affordability::DebtCapacity;
pub use engine::{calculate, MortgageCalculator};
pub use result::CalculationResult;
