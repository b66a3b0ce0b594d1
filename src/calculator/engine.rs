//! Mortgage calculator: one closed-form resolution per calculation mode

use super::affordability::DebtCapacity;
use super::annuity;
use super::result::CalculationResult;
use crate::assumptions::{Assumptions, NotaryFeesBreakdown};
use crate::error::Result;
use crate::inputs::{CalculationInputs, CalculationMode};

/// Quantities resolved by a mode handler before the shared totals
struct Resolved {
    property_price: f64,
    loan_amount: f64,
    monthly_payment: f64,
    required_salary: f64,
}

/// Stateless calculator
///
/// Holds only assumptions; every call takes an immutable input snapshot and
/// returns a fresh result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageCalculator {
    assumptions: Assumptions,
}

impl MortgageCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Derive every result quantity from the mode's driving input
    ///
    /// Out-of-range inputs are not rejected here; run validation first.
    pub fn calculate(&self, inputs: &CalculationInputs, mode: CalculationMode) -> CalculationResult {
        log::debug!(
            "Calculating {} mode from driving value {:.2}",
            mode,
            inputs.driving_value(mode)
        );

        let resolved = match mode {
            CalculationMode::Property => self.from_property(inputs),
            CalculationMode::Monthly => self.from_monthly(inputs),
            CalculationMode::Salary => self.from_salary(inputs),
        };

        self.assemble(inputs, resolved)
    }

    /// Same as `calculate`, with the mode given as its string tag
    pub fn calculate_tagged(&self, inputs: &CalculationInputs, mode: &str) -> Result<CalculationResult> {
        let mode: CalculationMode = mode.parse()?;
        Ok(self.calculate(inputs, mode))
    }

    /// Notary fees at the calculation rate
    pub fn notary_fees(&self, property_price: f64) -> f64 {
        self.assumptions.notary.fees(property_price)
    }

    /// Notary fee components at the detailed rate
    pub fn notary_fees_breakdown(&self, property_price: f64) -> NotaryFeesBreakdown {
        self.assumptions.notary.breakdown(property_price)
    }

    /// Largest installment the inputs' salary supports
    pub fn max_monthly_payment(&self, inputs: &CalculationInputs, salary: f64) -> f64 {
        DebtCapacity::from_inputs(inputs).max_monthly_payment(salary)
    }

    fn from_property(&self, inputs: &CalculationInputs) -> Resolved {
        let loan_amount = inputs.property_price - inputs.down_payment;
        let monthly_payment = annuity::monthly_payment(loan_amount, inputs.interest_rate, inputs.loan_duration);

        Resolved {
            property_price: inputs.property_price,
            loan_amount,
            monthly_payment,
            required_salary: DebtCapacity::from_inputs(inputs).required_salary(monthly_payment),
        }
    }

    fn from_monthly(&self, inputs: &CalculationInputs) -> Resolved {
        let loan_amount = annuity::loan_amount_from_payment(
            inputs.monthly_payment,
            inputs.interest_rate,
            inputs.loan_duration,
        );

        Resolved {
            property_price: loan_amount + inputs.down_payment,
            loan_amount,
            monthly_payment: inputs.monthly_payment,
            required_salary: DebtCapacity::from_inputs(inputs).required_salary(inputs.monthly_payment),
        }
    }

    fn from_salary(&self, inputs: &CalculationInputs) -> Resolved {
        let monthly_payment = DebtCapacity::from_inputs(inputs).max_monthly_payment(inputs.required_salary);
        let loan_amount =
            annuity::loan_amount_from_payment(monthly_payment, inputs.interest_rate, inputs.loan_duration);

        Resolved {
            property_price: loan_amount + inputs.down_payment,
            loan_amount,
            monthly_payment,
            required_salary: inputs.required_salary,
        }
    }

    fn assemble(&self, inputs: &CalculationInputs, resolved: Resolved) -> CalculationResult {
        let notary_fees = self.notary_fees(resolved.property_price);
        let total_cost = annuity::total_interest(resolved.monthly_payment, resolved.loan_amount, inputs.loan_duration);
        let total_purchase_cost = resolved.property_price + notary_fees;

        CalculationResult {
            monthly_payment: resolved.monthly_payment,
            required_salary: resolved.required_salary,
            gross_salary: self.assumptions.salary.gross_from_net(resolved.required_salary),
            total_cost,
            property_price: resolved.property_price,
            loan_amount: resolved.loan_amount,
            notary_fees,
            total_purchase_cost,
            total_operation_cost: total_purchase_cost + total_cost,
        }
    }
}

/// Calculate with the default assumptions
pub fn calculate(inputs: &CalculationInputs, mode: CalculationMode) -> CalculationResult {
    MortgageCalculator::default().calculate(inputs, mode)
}
