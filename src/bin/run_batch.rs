//! Run a batch of scenarios from CSV
//!
//! Reads one scenario per row (see `inputs::loader`), validates each row,
//! calculates the valid ones in parallel and writes one output row per
//! scenario. Rejected rows keep empty result columns and list their
//! validation errors.

use anyhow::{Context, Result};
use clap::Parser;
use mortgage_simulator::inputs::load_scenarios;
use mortgage_simulator::scenario::ScenarioRunner;
use mortgage_simulator::{Assumptions, CalculationResult};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Evaluate mortgage scenarios from a CSV file")]
struct Cli {
    /// Input CSV with a `mode` column and camelCase input columns
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// JSON file overriding the default assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("Failed to load assumptions from {}", path.display()))?,
        None => Assumptions::default_pricing(),
    };

    println!("Loading scenarios from {}...", cli.input.display());
    let scenarios = load_scenarios(&cli.input)
        .with_context(|| format!("Failed to load scenarios from {}", cli.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let calc_start = Instant::now();
    let reports = runner.run_batch(&scenarios);
    println!("Calculations complete in {:?}", calc_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;

    let mut header = vec!["ScenarioId", "Mode"];
    header.extend(CalculationResult::CSV_HEADERS);
    header.push("Errors");
    writer.write_record(&header)?;

    for report in &reports {
        let mut record = vec![
            report.scenario.scenario_id.to_string(),
            report.scenario.mode.to_string(),
        ];

        match report.outcome.result() {
            Some(result) => record.extend(result.csv_values().iter().map(|v| format!("{:.2}", v))),
            None => record.extend(std::iter::repeat(String::new()).take(CalculationResult::CSV_HEADERS.len())),
        }

        let errors: Vec<String> = report.outcome.errors().iter().map(|e| e.to_string()).collect();
        record.push(errors.join("; "));

        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Output written to {}", cli.output.display());

    let summary = ScenarioRunner::summarize(&reports);
    println!("\nBatch Summary:");
    println!("  Scenarios:  {}", summary.total);
    println!("  Calculated: {}", summary.calculated);
    println!("  Rejected:   {}", summary.rejected);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
