//! Debt-ratio affordability rule
//!
//! A lender caps total debt service at `debt_rate` of income. Recognized
//! rental income counts as income, existing installments count as debt.

use crate::inputs::CalculationInputs;

/// Borrower's debt capacity parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebtCapacity {
    /// Debt rate as a decimal (0.33)
    pub debt_rate: f64,
    /// Rental income after the lender's haircut
    pub effective_rental_income: f64,
    /// Installments already committed
    pub existing_loans: f64,
}

impl DebtCapacity {
    pub fn from_inputs(inputs: &CalculationInputs) -> Self {
        Self {
            debt_rate: inputs.debt_rate_decimal(),
            effective_rental_income: inputs.effective_rental_income(),
            existing_loans: inputs.existing_loans,
        }
    }

    /// Largest new installment a net monthly salary supports, never negative
    pub fn max_monthly_payment(&self, salary: f64) -> f64 {
        let available = salary * self.debt_rate + self.effective_rental_income - self.existing_loans;
        available.max(0.0)
    }

    /// Net monthly salary needed to carry a new installment
    ///
    /// Not floored: rental income larger than the installment plus existing
    /// loans yields a negative salary.
    pub fn required_salary(&self, monthly_payment: f64) -> f64 {
        (monthly_payment - self.effective_rental_income + self.existing_loans) / self.debt_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity() -> DebtCapacity {
        DebtCapacity {
            debt_rate: 0.33,
            effective_rental_income: 1_050.0,
            existing_loans: 1_200.0,
        }
    }

    #[test]
    fn test_max_payment() {
        let payment = capacity().max_monthly_payment(4_000.0);
        assert!((payment - 1_170.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_payment_is_floored() {
        let capacity = DebtCapacity {
            existing_loans: 5_000.0,
            ..capacity()
        };
        assert_eq!(capacity.max_monthly_payment(4_000.0), 0.0);
        assert_eq!(capacity.max_monthly_payment(0.0), 0.0);
    }

    #[test]
    fn test_required_salary_inverts_max_payment() {
        let capacity = capacity();
        for salary in [2_500.0, 4_000.0, 9_750.0] {
            let payment = capacity.max_monthly_payment(salary);
            assert!((capacity.required_salary(payment) - salary).abs() < 1e-6);
        }
    }

    #[test]
    fn test_from_inputs() {
        let inputs = CalculationInputs {
            debt_rate: 35.0,
            rental_income: 1_000.0,
            rental_income_percentage: 80.0,
            existing_loans: 300.0,
            ..Default::default()
        };
        let capacity = DebtCapacity::from_inputs(&inputs);
        assert!((capacity.debt_rate - 0.35).abs() < 1e-12);
        assert!((capacity.effective_rental_income - 800.0).abs() < 1e-9);
        assert_eq!(capacity.existing_loans, 300.0);
    }
}
