//! Calculation output

use serde::{Deserialize, Serialize};

/// Fully derived result of one calculation
///
/// Always satisfies:
/// - `total_purchase_cost = property_price + notary_fees`
/// - `total_operation_cost = total_purchase_cost + total_cost`
/// - `loan_amount = property_price - down_payment`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub monthly_payment: f64,

    /// Net monthly salary
    pub required_salary: f64,

    /// Approximate gross monthly salary
    pub gross_salary: f64,

    /// Interest paid over the loan life
    pub total_cost: f64,

    pub property_price: f64,
    pub loan_amount: f64,
    pub notary_fees: f64,

    /// Property price plus notary fees
    pub total_purchase_cost: f64,

    /// Purchase cost plus interest
    pub total_operation_cost: f64,
}

impl CalculationResult {
    /// Column headers for CSV output, in `csv_values` order
    pub const CSV_HEADERS: [&'static str; 9] = [
        "MonthlyPayment",
        "RequiredSalary",
        "GrossSalary",
        "TotalCost",
        "PropertyPrice",
        "LoanAmount",
        "NotaryFees",
        "TotalPurchaseCost",
        "TotalOperationCost",
    ];

    pub fn csv_values(&self) -> [f64; 9] {
        [
            self.monthly_payment,
            self.required_salary,
            self.gross_salary,
            self.total_cost,
            self.property_price,
            self.loan_amount,
            self.notary_fees,
            self.total_purchase_cost,
            self.total_operation_cost,
        ]
    }
}
