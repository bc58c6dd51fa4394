//! Error types for Housing Stats.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the housing register.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The delimited text itself is malformed.
    #[error("invalid CSV input: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// The header row does not name a required column.
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A row ends before reaching a required column.
    #[error("row {row}: no value for column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    /// A required column holds text that is not a whole number.
    #[error("row {row}: column '{column}' expects an integer, got '{value}'")]
    InvalidInteger {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A required column holds text that is not a real number.
    #[error("row {row}: column '{column}' expects a number, got '{value}'")]
    InvalidFloat {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Errors that can occur when classifying a building by floor count.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// The floor count is not an integral value.
    #[error("floor count must be an integer, got {value}")]
    InvalidType { value: f64 },

    /// The floor count is zero or negative.
    #[error("floor count must be positive, got {value}")]
    InvalidValue { value: i64 },
}

/// Errors that can occur when exporting the summary.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
