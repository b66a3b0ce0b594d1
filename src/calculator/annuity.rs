//! Level-payment annuity formulas for a fully amortizing loan
//!
//! Rates are annual nominal percentages (3.8 = 3.8%), compounded monthly.
//! Durations are whole years, paid monthly.

/// Monthly rate as a decimal from an annual percentage
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Number of monthly installments over the loan life
///
/// Kept in `f64` so any `u32` duration flows through without overflow.
pub fn number_of_payments(years: u32) -> f64 {
    years as f64 * 12.0
}

/// Monthly installment repaying `principal` over `years`
///
/// `M = P × i(1+i)^n / ((1+i)^n − 1)`, evaluated as `P × i / (1 − (1+i)^−n)`
/// so very long durations converge to `P × i` instead of `inf / inf`.
/// Falls back to `P / n` when the rate is zero.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let n = number_of_payments(years);

    if rate == 0.0 {
        return principal / n;
    }

    principal * rate / (1.0 - (1.0 + rate).powf(-n))
}

/// Principal that a monthly installment repays over `years`
///
/// Present value of an ordinary annuity: `P = M × (1 − (1+i)^−n) / i`,
/// `M × n` when the rate is zero.
pub fn loan_amount_from_payment(payment: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let n = number_of_payments(years);

    if rate == 0.0 {
        return payment * n;
    }

    payment * (1.0 - (1.0 + rate).powf(-n)) / rate
}

/// Interest paid over the loan life
pub fn total_interest(payment: f64, principal: f64, years: u32) -> f64 {
    payment * number_of_payments(years) - principal
}
