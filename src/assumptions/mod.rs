//! Lending assumptions: notary fees, salary conversion and validation bounds

mod limits;
mod notary;
mod salary;

pub use limits::ValidationLimits;
pub use notary::{NotaryFees, NotaryFeesBreakdown, NOTARY_FEE_RATE, NOTARY_FEE_RATE_DETAILED};
pub use salary::{SalaryConversion, GROSS_TO_NET_MULTIPLIER, NET_TO_GROSS_RATIO};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Container for all calculation assumptions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub notary: NotaryFees,
    pub salary: SalaryConversion,
    pub limits: ValidationLimits,
}

impl Assumptions {
    /// Assumptions matching the published simulator
    pub fn default_pricing() -> Self {
        Self::default()
    }

    /// Load assumptions from a JSON file; missing keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Load assumptions from any JSON reader
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let assumptions = serde_json::from_reader(reader)?;
        log::debug!("Loaded assumptions: {:?}", assumptions);
        Ok(assumptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing() {
        let assumptions = Assumptions::default_pricing();
        assert_eq!(assumptions.notary.rate, 0.075);
        assert_eq!(assumptions.notary.detailed_rate, 0.0793);
        assert_eq!(assumptions.salary.net_to_gross_ratio, 0.75);
        assert_eq!(assumptions.limits.max_loan_duration, 50);
    }

    #[test]
    fn test_partial_json_override() {
        let json = r#"{ "notary": { "rate": 0.025 }, "limits": { "max_debt_rate": 35.0 } }"#;
        let assumptions = Assumptions::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(assumptions.notary.rate, 0.025);
        assert_eq!(assumptions.notary.detailed_rate, 0.0793);
        assert_eq!(assumptions.limits.max_debt_rate, 35.0);
        assert_eq!(assumptions.limits.min_debt_rate, 5.0);
        assert_eq!(assumptions.salary, SalaryConversion::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = Assumptions::from_json_reader("{ notary: ".as_bytes()).unwrap_err();
        assert!(matches!(err, crate::error::CalculatorError::Json(_)));
    }
}
