//! Per-field validation rules

use super::{Field, ValidationError};
use crate::assumptions::ValidationLimits;

fn required(value: f64) -> bool {
    value.is_finite()
}

fn positive(value: f64) -> bool {
    value > 0.0
}

fn non_negative(value: f64) -> bool {
    value >= 0.0
}

fn percentage(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

fn currency(value: f64, limits: &ValidationLimits) -> bool {
    value >= limits.min_currency_value && value <= limits.max_currency_value
}

/// Amount that must be strictly positive (price, payment, salary)
pub fn positive_amount(field: Field, value: f64, limits: &ValidationLimits) -> Option<ValidationError> {
    let label = field.label();
    if !required(value) {
        return Some(ValidationError::new(field, format!("{} is required", label)));
    }
    if !positive(value) {
        return Some(ValidationError::new(field, format!("{} must be positive", label)));
    }
    if !currency(value, limits) {
        return Some(ValidationError::new(field, format!("{} must be a valid amount", label)));
    }
    None
}

/// Amount that may be zero (down payment, existing loans, rental income)
pub fn non_negative_amount(field: Field, value: f64, limits: &ValidationLimits) -> Option<ValidationError> {
    let label = field.label();
    if !required(value) {
        return Some(ValidationError::new(field, format!("{} is required", label)));
    }
    if !non_negative(value) {
        return Some(ValidationError::new(field, format!("{} cannot be negative", label)));
    }
    if !currency(value, limits) {
        return Some(ValidationError::new(field, format!("{} must be a valid amount", label)));
    }
    None
}

pub fn loan_duration(years: u32, limits: &ValidationLimits) -> Option<ValidationError> {
    let field = Field::LoanDuration;
    if years == 0 {
        return Some(ValidationError::new(field, "Loan duration must be positive"));
    }
    if years < limits.min_loan_duration {
        let plural = if limits.min_loan_duration > 1 { "s" } else { "" };
        return Some(ValidationError::new(
            field,
            format!("Loan duration must be at least {} year{}", limits.min_loan_duration, plural),
        ));
    }
    if years > limits.max_loan_duration {
        return Some(ValidationError::new(
            field,
            format!("Loan duration cannot exceed {} years", limits.max_loan_duration),
        ));
    }
    None
}

pub fn interest_rate(value: f64) -> Option<ValidationError> {
    let field = Field::InterestRate;
    if !required(value) {
        return Some(ValidationError::new(field, "Interest rate is required"));
    }
    if !non_negative(value) {
        return Some(ValidationError::new(field, "Interest rate cannot be negative"));
    }
    if !percentage(value) {
        return Some(ValidationError::new(field, "Interest rate must be between 0% and 100%"));
    }
    None
}

pub fn debt_rate(value: f64, limits: &ValidationLimits) -> Option<ValidationError> {
    let field = Field::DebtRate;
    if !required(value) {
        return Some(ValidationError::new(field, "Debt rate is required"));
    }
    if !percentage(value) {
        return Some(ValidationError::new(field, "Debt rate must be between 0% and 100%"));
    }
    if value < limits.min_debt_rate {
        return Some(ValidationError::new(
            field,
            format!("Debt rate must be at least {}%", limits.min_debt_rate),
        ));
    }
    if value > limits.max_debt_rate {
        return Some(ValidationError::new(
            field,
            format!("Debt rate cannot exceed {}%", limits.max_debt_rate),
        ));
    }
    None
}

pub fn rental_income_percentage(value: f64) -> Option<ValidationError> {
    let field = Field::RentalIncomePercentage;
    if !required(value) {
        return Some(ValidationError::new(field, "Rental income percentage is required"));
    }
    if !percentage(value) {
        return Some(ValidationError::new(
            field,
            "Rental income percentage must be between 0% and 100%",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    #[test]
    fn test_positive_amount() {
        assert!(positive_amount(Field::PropertyPrice, 250_000.0, &limits()).is_none());

        let zero = positive_amount(Field::PropertyPrice, 0.0, &limits()).unwrap();
        assert_eq!(zero.field, Field::PropertyPrice);
        assert_eq!(zero.message, "Property price must be positive");

        let negative = positive_amount(Field::MonthlyPayment, -1_000.0, &limits()).unwrap();
        assert_eq!(negative.message, "Monthly payment must be positive");

        let huge = positive_amount(Field::PropertyPrice, 1_000_000_000.0, &limits()).unwrap();
        assert_eq!(huge.message, "Property price must be a valid amount");

        let nan = positive_amount(Field::RequiredSalary, f64::NAN, &limits()).unwrap();
        assert_eq!(nan.message, "Salary is required");
    }

    #[test]
    fn test_non_negative_amount() {
        assert!(non_negative_amount(Field::DownPayment, 0.0, &limits()).is_none());
        assert!(non_negative_amount(Field::DownPayment, 50_000.0, &limits()).is_none());

        let err = non_negative_amount(Field::DownPayment, -1_000.0, &limits()).unwrap();
        assert_eq!(err.message, "Down payment cannot be negative");

        let err = non_negative_amount(Field::ExistingLoans, f64::INFINITY, &limits()).unwrap();
        assert_eq!(err.message, "Existing loans is required");
    }

    #[test]
    fn test_loan_duration_bounds() {
        assert!(loan_duration(25, &limits()).is_none());
        assert!(loan_duration(1, &limits()).is_none());
        assert!(loan_duration(50, &limits()).is_none());

        assert_eq!(loan_duration(0, &limits()).unwrap().message, "Loan duration must be positive");
        assert!(loan_duration(100, &limits()).unwrap().message.contains("cannot exceed"));

        let strict = ValidationLimits {
            min_loan_duration: 3,
            ..limits()
        };
        assert_eq!(
            loan_duration(2, &strict).unwrap().message,
            "Loan duration must be at least 3 years"
        );
    }

    #[test]
    fn test_interest_rate() {
        assert!(interest_rate(3.5).is_none());
        assert!(interest_rate(0.0).is_none());
        assert_eq!(interest_rate(-1.0).unwrap().message, "Interest rate cannot be negative");
        assert!(interest_rate(150.0).is_some());
    }

    #[test]
    fn test_debt_rate() {
        assert!(debt_rate(33.0, &limits()).is_none());
        assert_eq!(debt_rate(2.0, &limits()).unwrap().message, "Debt rate must be at least 5%");
        assert_eq!(debt_rate(75.0, &limits()).unwrap().message, "Debt rate cannot exceed 60%");
        assert_eq!(
            debt_rate(120.0, &limits()).unwrap().message,
            "Debt rate must be between 0% and 100%"
        );
    }

    #[test]
    fn test_rental_income_percentage() {
        assert!(rental_income_percentage(70.0).is_none());
        assert!(rental_income_percentage(0.0).is_none());
        assert!(rental_income_percentage(100.5).is_some());
    }
}
