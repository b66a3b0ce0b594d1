//! Error types shared across the crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Mode tag outside of `property`, `monthly`, `salary`
    #[error("Unsupported calculation mode: {0}")]
    UnsupportedMode(String),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field} on row {row}")]
    InvalidField {
        row: usize,
        field: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
