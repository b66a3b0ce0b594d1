//! Net/gross salary conversion ratios

use serde::{Deserialize, Serialize};

/// Net = gross × 0.75, used to report the gross salary in results
pub const NET_TO_GROSS_RATIO: f64 = 0.75;

/// Gross ≈ net × 1.3, used when a salary is entered or shown as gross
pub const GROSS_TO_NET_MULTIPLIER: f64 = 1.3;

/// Salary conversion assumptions
///
/// The two ratios are not reciprocal. Results report
/// `gross = net / net_to_gross_ratio`, while the salary-basis toggle uses
/// `gross_to_net_multiplier` for entry and display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryConversion {
    pub net_to_gross_ratio: f64,
    pub gross_to_net_multiplier: f64,
}

impl Default for SalaryConversion {
    fn default() -> Self {
        Self {
            net_to_gross_ratio: NET_TO_GROSS_RATIO,
            gross_to_net_multiplier: GROSS_TO_NET_MULTIPLIER,
        }
    }
}

impl SalaryConversion {
    /// Approximate gross salary for a net salary
    pub fn gross_from_net(&self, net_salary: f64) -> f64 {
        net_salary / self.net_to_gross_ratio
    }
}
