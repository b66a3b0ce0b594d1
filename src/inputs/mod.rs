//! Calculation inputs and scenario loading

mod data;
pub mod loader;

pub use data::{CalculationInputs, CalculationMode, SalaryBasis, SalaryKind, SalaryPeriod};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
