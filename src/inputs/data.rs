//! Calculation input snapshot, mode selector and salary basis

use crate::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the three headline quantities is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Property price known, derive payment and salary
    Property,
    /// Monthly payment known, derive price and salary
    Monthly,
    /// Net monthly salary known, derive affordable payment and price
    Salary,
}

impl CalculationMode {
    pub const ALL: [CalculationMode; 3] = [
        CalculationMode::Property,
        CalculationMode::Monthly,
        CalculationMode::Salary,
    ];

    /// Tag used in serialized inputs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::Property => "property",
            CalculationMode::Monthly => "monthly",
            CalculationMode::Salary => "salary",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMode {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "property" => Ok(CalculationMode::Property),
            "monthly" => Ok(CalculationMode::Monthly),
            "salary" => Ok(CalculationMode::Salary),
            other => Err(CalculatorError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Immutable input snapshot for one calculation
///
/// Currency amounts are in base units, rates and percentages are plain
/// numbers (3.8 means 3.8%), the duration is in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationInputs {
    /// Purchase price of the property (driving in property mode)
    pub property_price: f64,

    /// Monthly loan installment (driving in monthly mode)
    pub monthly_payment: f64,

    /// Net monthly salary (driving in salary mode)
    pub required_salary: f64,

    /// Personal contribution subtracted from the price
    pub down_payment: f64,

    /// Loan duration in years
    pub loan_duration: u32,

    /// Annual nominal interest rate, percent
    pub interest_rate: f64,

    /// Maximum share of income allocatable to debt service, percent
    pub debt_rate: f64,

    /// Monthly installments already committed
    pub existing_loans: f64,

    /// Monthly rental inflow
    pub rental_income: f64,

    /// Share of rental income recognized by the lender, percent
    pub rental_income_percentage: f64,
}

impl Default for CalculationInputs {
    fn default() -> Self {
        Self {
            property_price: 250_000.0,
            monthly_payment: 1_189.0,
            required_salary: 3_400.0,
            down_payment: 50_000.0,
            loan_duration: 25,
            interest_rate: 3.8,
            debt_rate: 33.0,
            existing_loans: 0.0,
            rental_income: 0.0,
            rental_income_percentage: 70.0,
        }
    }
}

impl CalculationInputs {
    /// Value of the quantity that drives the given mode
    pub fn driving_value(&self, mode: CalculationMode) -> f64 {
        match mode {
            CalculationMode::Property => self.property_price,
            CalculationMode::Monthly => self.monthly_payment,
            CalculationMode::Salary => self.required_salary,
        }
    }

    /// Loan amount implied by the property price
    pub fn loan_amount(&self) -> f64 {
        self.property_price - self.down_payment
    }

    /// Periodic (monthly) interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Number of monthly installments
    pub fn number_of_payments(&self) -> u64 {
        u64::from(self.loan_duration) * 12
    }

    /// Debt rate as a decimal (33 -> 0.33)
    pub fn debt_rate_decimal(&self) -> f64 {
        self.debt_rate / 100.0
    }

    /// Rental income after the lender's haircut
    pub fn effective_rental_income(&self) -> f64 {
        self.rental_income * (self.rental_income_percentage / 100.0)
    }
}

/// Period the entered salary refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    #[default]
    Monthly,
    Annual,
}

/// Whether the entered salary is before or after payroll deductions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryKind {
    #[default]
    Net,
    Gross,
}

/// How a salary figure was entered or should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryBasis {
    pub period: SalaryPeriod,
    pub kind: SalaryKind,
}

impl SalaryBasis {
    pub fn new(period: SalaryPeriod, kind: SalaryKind) -> Self {
        Self { period, kind }
    }

    /// Convert an entered amount to the monthly net salary the calculator uses
    ///
    /// `gross_to_net` is the display multiplier (gross ≈ net × 1.3).
    pub fn to_monthly_net(&self, amount: f64, gross_to_net: f64) -> f64 {
        let monthly = match self.period {
            SalaryPeriod::Monthly => amount,
            SalaryPeriod::Annual => amount / 12.0,
        };
        match self.kind {
            SalaryKind::Net => monthly,
            SalaryKind::Gross => monthly / gross_to_net,
        }
    }

    /// Express a monthly net salary in this basis
    pub fn from_monthly_net(&self, monthly_net: f64, gross_to_net: f64) -> f64 {
        let amount = match self.period {
            SalaryPeriod::Monthly => monthly_net,
            SalaryPeriod::Annual => monthly_net * 12.0,
        };
        match self.kind {
            SalaryKind::Net => amount,
            SalaryKind::Gross => amount * gross_to_net,
        }
    }
}
