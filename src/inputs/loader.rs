//! Load calculation scenarios from CSV
//!
//! One row per scenario. The `mode` column selects the calculation, every
//! other column maps onto a `CalculationInputs` field (camelCase headers).
//! Empty cells and missing columns fall back to the form defaults.

use super::{CalculationInputs, CalculationMode};
use crate::error::{CalculatorError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    scenario_id: Option<u64>,
    mode: String,
    #[serde(default)]
    property_price: Option<f64>,
    #[serde(default)]
    monthly_payment: Option<f64>,
    #[serde(default)]
    required_salary: Option<f64>,
    #[serde(default)]
    down_payment: Option<f64>,
    #[serde(default)]
    loan_duration: Option<f64>,
    #[serde(default)]
    interest_rate: Option<f64>,
    #[serde(default)]
    debt_rate: Option<f64>,
    #[serde(default)]
    existing_loans: Option<f64>,
    #[serde(default)]
    rental_income: Option<f64>,
    #[serde(default)]
    rental_income_percentage: Option<f64>,
}

/// A calculation request read from a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub scenario_id: u64,
    pub mode: CalculationMode,
    pub inputs: CalculationInputs,
}

impl CsvRow {
    fn to_scenario(self, row_number: usize) -> Result<Scenario> {
        let mode: CalculationMode = self.mode.trim().parse()?;
        let defaults = CalculationInputs::default();
        let loan_duration = match self.loan_duration {
            Some(years) => whole_years(years).ok_or_else(|| CalculatorError::InvalidField {
                row: row_number,
                field: "loanDuration".to_string(),
                value: years.to_string(),
            })?,
            None => defaults.loan_duration,
        };

        let inputs = CalculationInputs {
            property_price: self.property_price.unwrap_or(defaults.property_price),
            monthly_payment: self.monthly_payment.unwrap_or(defaults.monthly_payment),
            required_salary: self.required_salary.unwrap_or(defaults.required_salary),
            down_payment: self.down_payment.unwrap_or(defaults.down_payment),
            loan_duration,
            interest_rate: self.interest_rate.unwrap_or(defaults.interest_rate),
            debt_rate: self.debt_rate.unwrap_or(defaults.debt_rate),
            existing_loans: self.existing_loans.unwrap_or(defaults.existing_loans),
            rental_income: self.rental_income.unwrap_or(defaults.rental_income),
            rental_income_percentage: self
                .rental_income_percentage
                .unwrap_or(defaults.rental_income_percentage),
        };

        let scenario_id = self.scenario_id.unwrap_or(row_number as u64);

        Ok(Scenario { scenario_id, mode, inputs })
    }
}

/// Duration cell as whole years; fractional, negative or oversized values are rejected
fn whole_years(years: f64) -> Option<u32> {
    if years.fract() != 0.0 || years < 0.0 || years > u32::MAX as f64 {
        return None;
    }
    Some(years as u32)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario(idx + 1)?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = "\
mode,propertyPrice,monthlyPayment,requiredSalary,downPayment,loanDuration,interestRate
property,300000,,,60000,20,3.5
salary,,,4000,,,
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        let first = &scenarios[0];
        assert_eq!(first.scenario_id, 1);
        assert_eq!(first.mode, CalculationMode::Property);
        assert_eq!(first.inputs.property_price, 300_000.0);
        assert_eq!(first.inputs.down_payment, 60_000.0);
        assert_eq!(first.inputs.loan_duration, 20);
        assert_eq!(first.inputs.debt_rate, 33.0);

        let second = &scenarios[1];
        assert_eq!(second.scenario_id, 2);
        assert_eq!(second.mode, CalculationMode::Salary);
        assert_eq!(second.inputs.required_salary, 4_000.0);
        assert_eq!(second.inputs.loan_duration, 25);
    }

    #[test]
    fn test_explicit_scenario_id() {
        let data = "scenarioId,mode,monthlyPayment\n42,monthly,1170\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios[0].scenario_id, 42);
        assert_eq!(scenarios[0].inputs.monthly_payment, 1_170.0);
    }

    #[test]
    fn test_fractional_duration_rejected() {
        let data = "mode,propertyPrice,loanDuration\nproperty,250000,20\nproperty,250000,25.5\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();

        match err {
            CalculatorError::InvalidField { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "loanDuration");
                assert_eq!(value, "25.5");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_whole_years() {
        assert_eq!(whole_years(25.0), Some(25));
        assert_eq!(whole_years(0.0), Some(0));
        assert_eq!(whole_years(-3.0), None);
        assert_eq!(whole_years(1e12), None);
        assert_eq!(whole_years(f64::NAN), None);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let data = "mode,propertyPrice\nquarterly,250000\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::UnsupportedMode(_)));
    }
}
