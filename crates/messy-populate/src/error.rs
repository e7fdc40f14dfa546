//! Error types for the dataset writers.

use thiserror::Error;

/// Errors that can occur while writing a dataset.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] messy_generator::GeneratorError),

    /// Delimiter that cannot be used by the CSV reader.
    #[error("Delimiter {0:?} is not a single-byte character")]
    InvalidDelimiter(char),

    /// Input file has no header line.
    #[error("Input file '{0}' is empty")]
    EmptyInput(String),
}
