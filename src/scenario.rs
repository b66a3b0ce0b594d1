//! Scenario runner for batch calculations
//!
//! Validates and evaluates many scenarios with one set of assumptions.
//! Each scenario is independent, so batches run in parallel.

use crate::assumptions::Assumptions;
use crate::calculator::{CalculationResult, MortgageCalculator};
use crate::inputs::{CalculationInputs, CalculationMode, Scenario};
use crate::validation::{ValidationError, Validator};
use rayon::prelude::*;

/// Outcome of one scenario: a result, or the validation errors that
/// prevented the calculation
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    Calculated(CalculationResult),
    Rejected(Vec<ValidationError>),
}

impl ScenarioOutcome {
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            ScenarioOutcome::Calculated(result) => Some(result),
            ScenarioOutcome::Rejected(_) => None,
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ScenarioOutcome::Calculated(_) => &[],
            ScenarioOutcome::Rejected(errors) => errors,
        }
    }
}

/// Scenario paired with its outcome
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: ScenarioOutcome,
}

/// Batch summary counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub calculated: usize,
    pub rejected: usize,
}

/// Validate-then-calculate runner sharing one set of assumptions
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    calculator: MortgageCalculator,
    validator: Validator,
}

impl ScenarioRunner {
    /// Runner with the default pricing assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_pricing())
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            calculator: MortgageCalculator::new(assumptions),
            validator: Validator::new(assumptions.limits),
        }
    }

    pub fn calculator(&self) -> &MortgageCalculator {
        &self.calculator
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate, then calculate only when no errors were reported
    pub fn run(&self, inputs: &CalculationInputs, mode: CalculationMode) -> ScenarioOutcome {
        let errors = self.validator.validate(inputs, mode);
        if !errors.is_empty() {
            return ScenarioOutcome::Rejected(errors);
        }
        ScenarioOutcome::Calculated(self.calculator.calculate(inputs, mode))
    }

    /// Run every scenario in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioReport> {
        let reports: Vec<ScenarioReport> = scenarios
            .par_iter()
            .map(|scenario| ScenarioReport {
                scenario: scenario.clone(),
                outcome: self.run(&scenario.inputs, scenario.mode),
            })
            .collect();

        for report in &reports {
            if let ScenarioOutcome::Rejected(errors) = &report.outcome {
                log::warn!(
                    "Scenario {} rejected: {}",
                    report.scenario.scenario_id,
                    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
                );
            }
        }

        let summary = Self::summarize(&reports);
        log::debug!(
            "Batch complete: {} scenarios, {} calculated, {} rejected",
            summary.total,
            summary.calculated,
            summary.rejected
        );

        reports
    }

    /// Run the same inputs through every mode
    pub fn run_all_modes(&self, inputs: &CalculationInputs) -> Vec<(CalculationMode, ScenarioOutcome)> {
        CalculationMode::ALL
            .iter()
            .map(|&mode| (mode, self.run(inputs, mode)))
            .collect()
    }

    pub fn summarize(reports: &[ScenarioReport]) -> BatchSummary {
        let calculated = reports.iter().filter(|r| r.outcome.result().is_some()).count();
        BatchSummary {
            total: reports.len(),
            calculated,
            rejected: reports.len() - calculated,
        }
    }
}
