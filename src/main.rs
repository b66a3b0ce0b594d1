//! Mortgage Simulator CLI
//!
//! Command-line interface for one-off mortgage calculations

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use mortgage_simulator::assumptions::NotaryFeesBreakdown;
use mortgage_simulator::inputs::{SalaryKind, SalaryPeriod};
use mortgage_simulator::{
    Assumptions, CalculationInputs, CalculationMode, CalculationResult, MortgageCalculator, SalaryBasis, Validator,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mortgage-sim", version, about = "Mortgage affordability simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file overriding the default assumptions
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Include the detailed notary fee breakdown
    #[arg(long, global = true)]
    breakdown: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Property price known: derive monthly payment and required salary
    Property {
        /// Property price
        price: f64,
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Monthly payment known: derive property price and required salary
    Monthly {
        /// Desired monthly payment
        payment: f64,
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Salary known: derive affordable payment and property price
    Salary {
        /// Salary, monthly net unless --annual / --gross
        salary: f64,
        /// Salary is an annual figure
        #[arg(long)]
        annual: bool,
        /// Salary is before payroll deductions
        #[arg(long)]
        gross: bool,
        #[command(flatten)]
        loan: LoanArgs,
    },
}

#[derive(Args, Debug)]
struct LoanArgs {
    /// Personal contribution
    #[arg(long, default_value_t = 50_000.0)]
    down_payment: f64,

    /// Loan duration in years
    #[arg(long, default_value_t = 25)]
    years: u32,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 3.8)]
    rate: f64,

    /// Maximum debt rate, percent
    #[arg(long, default_value_t = 33.0)]
    debt_rate: f64,

    /// Monthly installments already committed
    #[arg(long, default_value_t = 0.0)]
    existing_loans: f64,

    /// Monthly rental income
    #[arg(long, default_value_t = 0.0)]
    rental_income: f64,

    /// Share of rental income recognized, percent
    #[arg(long, default_value_t = 70.0)]
    rental_percentage: f64,
}

impl LoanArgs {
    fn apply(&self, inputs: CalculationInputs) -> CalculationInputs {
        CalculationInputs {
            down_payment: self.down_payment,
            loan_duration: self.years,
            interest_rate: self.rate,
            debt_rate: self.debt_rate,
            existing_loans: self.existing_loans,
            rental_income: self.rental_income,
            rental_income_percentage: self.rental_percentage,
            ..inputs
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    mode: CalculationMode,
    inputs: CalculationInputs,
    result: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    notary_breakdown: Option<NotaryFeesBreakdown>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("Failed to load assumptions from {}", path.display()))?,
        None => Assumptions::default_pricing(),
    };

    let defaults = CalculationInputs::default();
    let mut salary_basis = SalaryBasis::default();
    let (mode, inputs) = match &cli.command {
        Command::Property { price, loan } => (
            CalculationMode::Property,
            loan.apply(CalculationInputs { property_price: *price, ..defaults }),
        ),
        Command::Monthly { payment, loan } => (
            CalculationMode::Monthly,
            loan.apply(CalculationInputs { monthly_payment: *payment, ..defaults }),
        ),
        Command::Salary { salary, annual, gross, loan } => {
            salary_basis = SalaryBasis::new(
                if *annual { SalaryPeriod::Annual } else { SalaryPeriod::Monthly },
                if *gross { SalaryKind::Gross } else { SalaryKind::Net },
            );
            let monthly_net = salary_basis.to_monthly_net(*salary, assumptions.salary.gross_to_net_multiplier);
            (
                CalculationMode::Salary,
                loan.apply(CalculationInputs { required_salary: monthly_net, ..defaults }),
            )
        }
    };

    let errors = Validator::new(assumptions.limits).validate(&inputs, mode);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", error);
        }
        bail!("{} invalid input(s) for {} mode", errors.len(), mode);
    }

    let calculator = MortgageCalculator::new(assumptions);
    let result = calculator.calculate(&inputs, mode);
    let notary_breakdown = cli
        .breakdown
        .then(|| calculator.notary_fees_breakdown(result.property_price));

    if cli.json {
        let output = Output {
            mode,
            inputs,
            result,
            notary_breakdown,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Mortgage Simulator v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");
    println!("Mode: {}", mode);
    println!("  Down payment:    {:>14.2}", inputs.down_payment);
    println!("  Duration:        {:>11} yrs", inputs.loan_duration);
    println!("  Interest rate:   {:>13.2}%", inputs.interest_rate);
    println!("  Debt rate:       {:>13.2}%", inputs.debt_rate);
    if inputs.existing_loans > 0.0 || inputs.rental_income > 0.0 {
        println!("  Existing loans:  {:>14.2}", inputs.existing_loans);
        println!(
            "  Rental income:   {:>14.2} ({}% recognized)",
            inputs.rental_income, inputs.rental_income_percentage
        );
    }
    println!();

    println!("Results:");
    println!("  Property price:       {:>14.2}", result.property_price);
    println!("  Notary fees:          {:>14.2}", result.notary_fees);
    println!("  Total purchase cost:  {:>14.2}", result.total_purchase_cost);
    println!("  Loan amount:          {:>14.2}", result.loan_amount);
    println!("  Monthly payment:      {:>14.2}", result.monthly_payment);
    println!("  Total interest:       {:>14.2}", result.total_cost);
    println!("  Total operation cost: {:>14.2}", result.total_operation_cost);
    println!("  Net salary (monthly): {:>14.2}", result.required_salary);
    println!("  Gross salary (approx):{:>14.2}", result.gross_salary);
    if salary_basis != SalaryBasis::default() {
        println!(
            "  Salary as entered:    {:>14.2}",
            salary_basis.from_monthly_net(result.required_salary, assumptions.salary.gross_to_net_multiplier)
        );
    }

    if let Some(breakdown) = notary_breakdown {
        println!("\nNotary fee breakdown (detailed rate {:.2}%):", assumptions.notary.detailed_rate * 100.0);
        println!("  Notary emoluments:    {:>14.2}", breakdown.notary_emoluments);
        println!("  Registration duties:  {:>14.2}", breakdown.registration_fees);
        println!("  Various taxes:        {:>14.2}", breakdown.various_taxes);
        println!("  Total:                {:>14.2}", breakdown.total);
    }

    Ok(())
}
