//! Input validation run before any calculation
//!
//! Validation only reports: it returns an ordered list of field-level errors
//! and never alters the inputs. An empty list means the calculator may run.

mod rules;

use crate::assumptions::ValidationLimits;
use crate::calculator::DebtCapacity;
use crate::inputs::{CalculationInputs, CalculationMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input field an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PropertyPrice,
    MonthlyPayment,
    RequiredSalary,
    DownPayment,
    LoanDuration,
    InterestRate,
    DebtRate,
    ExistingLoans,
    RentalIncome,
    RentalIncomePercentage,
}

impl Field {
    /// Key matching the serialized input field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PropertyPrice => "propertyPrice",
            Field::MonthlyPayment => "monthlyPayment",
            Field::RequiredSalary => "requiredSalary",
            Field::DownPayment => "downPayment",
            Field::LoanDuration => "loanDuration",
            Field::InterestRate => "interestRate",
            Field::DebtRate => "debtRate",
            Field::ExistingLoans => "existingLoans",
            Field::RentalIncome => "rentalIncome",
            Field::RentalIncomePercentage => "rentalIncomePercentage",
        }
    }

    /// Human-readable name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::PropertyPrice => "Property price",
            Field::MonthlyPayment => "Monthly payment",
            Field::RequiredSalary => "Salary",
            Field::DownPayment => "Down payment",
            Field::LoanDuration => "Loan duration",
            Field::InterestRate => "Interest rate",
            Field::DebtRate => "Debt rate",
            Field::ExistingLoans => "Existing loans",
            Field::RentalIncome => "Rental income",
            Field::RentalIncomePercentage => "Rental income percentage",
        }
    }

    /// Field holding the driving value of a mode
    pub fn driving(mode: CalculationMode) -> Self {
        match mode {
            CalculationMode::Property => Field::PropertyPrice,
            CalculationMode::Monthly => Field::MonthlyPayment,
            CalculationMode::Salary => Field::RequiredSalary,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// First message reported for a field, if any
pub fn field_error(errors: &[ValidationError], field: Field) -> Option<&str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.as_str())
}

/// Validates input snapshots against configured limits
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Validate the inputs used by one mode
    ///
    /// Order: the mode's driving field, the common loan fields, the
    /// affordability fields, then the cross-field rules.
    pub fn validate(&self, inputs: &CalculationInputs, mode: CalculationMode) -> Vec<ValidationError> {
        let field = Field::driving(mode);
        let mut errors: Vec<ValidationError> =
            rules::positive_amount(field, inputs.driving_value(mode), &self.limits)
                .into_iter()
                .collect();

        errors.extend(self.common_errors(inputs));
        errors.extend(self.affordability_errors(inputs));

        // Cross-field rules only make sense once each field is usable
        if errors.is_empty() {
            errors.extend(self.cross_field_errors(inputs, mode));
        }

        errors
    }

    /// Validate every field regardless of mode
    ///
    /// The down payment ceiling is checked against the entered property price.
    pub fn validate_all(&self, inputs: &CalculationInputs) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = CalculationMode::ALL
            .iter()
            .filter_map(|&mode| {
                rules::positive_amount(Field::driving(mode), inputs.driving_value(mode), &self.limits)
            })
            .collect();

        errors.extend(self.common_errors(inputs));
        errors.extend(self.affordability_errors(inputs));

        if errors.is_empty() {
            errors.extend(self.cross_field_errors(inputs, CalculationMode::Property));
        }

        errors
    }

    fn common_errors(&self, inputs: &CalculationInputs) -> Vec<ValidationError> {
        [
            rules::non_negative_amount(Field::DownPayment, inputs.down_payment, &self.limits),
            rules::loan_duration(inputs.loan_duration, &self.limits),
            rules::interest_rate(inputs.interest_rate),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn affordability_errors(&self, inputs: &CalculationInputs) -> Vec<ValidationError> {
        [
            rules::debt_rate(inputs.debt_rate, &self.limits),
            rules::non_negative_amount(Field::ExistingLoans, inputs.existing_loans, &self.limits),
            rules::non_negative_amount(Field::RentalIncome, inputs.rental_income, &self.limits),
            rules::rental_income_percentage(inputs.rental_income_percentage),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn cross_field_errors(&self, inputs: &CalculationInputs, mode: CalculationMode) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // Checked against the entered price in every mode. Property mode also
        // rejects a down payment equal to the price, which leaves no loan.
        let exceeds = match mode {
            CalculationMode::Property => inputs.down_payment >= inputs.property_price,
            CalculationMode::Monthly | CalculationMode::Salary => inputs.down_payment > inputs.property_price,
        };
        if exceeds {
            errors.push(ValidationError::new(
                Field::DownPayment,
                "Down payment cannot exceed the property price",
            ));
        }

        if mode == CalculationMode::Salary
            && DebtCapacity::from_inputs(inputs).max_monthly_payment(inputs.required_salary) == 0.0
        {
            errors.push(ValidationError::new(
                Field::RequiredSalary,
                "Salary leaves no borrowing capacity after existing loans",
            ));
        }

        if inputs.interest_rate > self.limits.max_reasonable_interest_rate {
            errors.push(ValidationError::new(
                Field::InterestRate,
                format!(
                    "An interest rate above {}% is unrealistic",
                    self.limits.max_reasonable_interest_rate
                ),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> CalculationInputs {
        CalculationInputs {
            property_price: 250_000.0,
            monthly_payment: 1_200.0,
            required_salary: 3_500.0,
            down_payment: 50_000.0,
            loan_duration: 25,
            interest_rate: 3.5,
            debt_rate: 33.0,
            existing_loans: 0.0,
            rental_income: 0.0,
            rental_income_percentage: 70.0,
        }
    }

    #[test]
    fn test_valid_inputs_pass_every_mode() {
        let validator = Validator::default();
        for mode in CalculationMode::ALL {
            assert!(validator.validate(&valid_inputs(), mode).is_empty(), "mode {}", mode);
        }
        assert!(validator.validate_all(&valid_inputs()).is_empty());
    }

    #[test]
    fn test_only_driving_field_checked_per_mode() {
        let inputs = CalculationInputs {
            property_price: 0.0,
            ..valid_inputs()
        };
        let validator = Validator::default();

        let errors = validator.validate(&inputs, CalculationMode::Property);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::PropertyPrice);

        assert!(validator.validate(&inputs, CalculationMode::Monthly).is_empty());
        assert!(validator.validate(&inputs, CalculationMode::Salary).is_empty());
    }

    #[test]
    fn test_errors_are_ordered() {
        let inputs = CalculationInputs {
            monthly_payment: -5.0,
            down_payment: -1.0,
            interest_rate: -2.0,
            debt_rate: 80.0,
            ..valid_inputs()
        };
        let errors = Validator::default().validate(&inputs, CalculationMode::Monthly);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec![Field::MonthlyPayment, Field::DownPayment, Field::InterestRate, Field::DebtRate]
        );
    }

    #[test]
    fn test_down_payment_ceiling_property_mode() {
        let inputs = CalculationInputs {
            down_payment: 300_000.0,
            ..valid_inputs()
        };
        let errors = Validator::default().validate(&inputs, CalculationMode::Property);
        assert_eq!(
            field_error(&errors, Field::DownPayment),
            Some("Down payment cannot exceed the property price")
        );

        // A down payment equal to the price leaves nothing to borrow
        let inputs = CalculationInputs {
            down_payment: 250_000.0,
            ..valid_inputs()
        };
        let errors = Validator::default().validate(&inputs, CalculationMode::Property);
        assert!(field_error(&errors, Field::DownPayment).is_some());
    }

    #[test]
    fn test_down_payment_ceiling_monthly_and_salary_modes() {
        let inputs = CalculationInputs {
            down_payment: 900_000_000.0,
            monthly_payment: 1.0,
            required_salary: 10_000.0,
            ..valid_inputs()
        };
        let validator = Validator::default();

        for mode in [CalculationMode::Monthly, CalculationMode::Salary] {
            let errors = validator.validate(&inputs, mode);
            assert_eq!(
                field_error(&errors, Field::DownPayment),
                Some("Down payment cannot exceed the property price"),
                "{} mode",
                mode
            );
        }

        // Equal to the entered price is still accepted outside property mode
        let at_price = CalculationInputs {
            down_payment: 250_000.0,
            ..valid_inputs()
        };
        assert!(validator.validate(&at_price, CalculationMode::Monthly).is_empty());
        assert!(validator.validate(&at_price, CalculationMode::Salary).is_empty());
    }

    #[test]
    fn test_salary_without_capacity_flagged() {
        let inputs = CalculationInputs {
            required_salary: 2_000.0,
            existing_loans: 1_000.0,
            ..valid_inputs()
        };
        let errors = Validator::default().validate(&inputs, CalculationMode::Salary);
        assert!(field_error(&errors, Field::RequiredSalary).is_some());
        assert!(field_error(&errors, Field::DownPayment).is_none());
    }

    #[test]
    fn test_unrealistic_interest_rate_flagged() {
        let inputs = CalculationInputs {
            interest_rate: 25.0,
            ..valid_inputs()
        };
        let errors = Validator::default().validate(&inputs, CalculationMode::Property);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::InterestRate);
        assert_eq!(errors[0].message, "An interest rate above 20% is unrealistic");
    }

    #[test]
    fn test_duration_above_limit_reported_once() {
        let inputs = CalculationInputs {
            loan_duration: 55,
            ..valid_inputs()
        };
        let errors = Validator::default().validate(&inputs, CalculationMode::Property);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Loan duration cannot exceed 50 years");
    }

    #[test]
    fn test_validate_all_checks_every_driving_field() {
        let inputs = CalculationInputs {
            property_price: 0.0,
            monthly_payment: 0.0,
            required_salary: 0.0,
            ..valid_inputs()
        };
        let errors = Validator::default().validate_all(&inputs);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::PropertyPrice, Field::MonthlyPayment, Field::RequiredSalary]);
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let inputs = CalculationInputs {
            down_payment: -10.0,
            ..valid_inputs()
        };
        let before = inputs;
        let _ = Validator::default().validate(&inputs, CalculationMode::Property);
        assert_eq!(inputs, before);
    }

    #[test]
    fn test_error_display() {
        let error = ValidationError::new(Field::DebtRate, "Debt rate cannot exceed 60%");
        assert_eq!(error.to_string(), "debtRate: Debt rate cannot exceed 60%");
        assert_eq!(serde_json::to_string(&error.field).unwrap(), "\"debtRate\"");
    }
}
