//! Bounds enforced by input validation

use serde::{Deserialize, Serialize};

/// Validation bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub min_currency_value: f64,
    pub max_currency_value: f64,

    /// Loan duration bounds, years
    pub min_loan_duration: u32,
    pub max_loan_duration: u32,

    /// Debt rate bounds, percent
    pub min_debt_rate: f64,
    pub max_debt_rate: f64,

    /// Above this an otherwise valid rate is flagged as unrealistic
    pub max_reasonable_interest_rate: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_currency_value: 0.0,
            max_currency_value: 999_999_999.0,
            min_loan_duration: 1,
            max_loan_duration: 50,
            min_debt_rate: 5.0,
            max_debt_rate: 60.0,
            max_reasonable_interest_rate: 20.0,
        }
    }
}
