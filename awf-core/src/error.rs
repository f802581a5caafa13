/// Error types for loading wildfire observations
use thiserror::Error;

/// Errors raised while reading and validating the observation CSV.
///
/// Row numbers are 1-based and count data rows only (the header is not a row).
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to read the CSV file from disk
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// The `Date` field did not match any supported format
    #[error("Row {row}: failed to parse date '{value}'")]
    DateParse { row: usize, value: String },

    /// A numeric field was empty or not a number
    #[error("Row {row}: invalid {column} value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The `Region` field was blank
    #[error("Row {row}: empty region")]
    EmptyRegion { row: usize },
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
