/// Error types for loading the indicators dataset
use thiserror::Error;

/// Errors raised while fetching or parsing the dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The HTTP request did not complete
    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to read CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required header is absent
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A numeric field is negative or not finite
    #[error("Invalid value for {field} on line {line}: {value}")]
    InvalidValue {
        line: u64,
        field: &'static str,
        value: f64,
    },

    /// The file parsed but held no rows
    #[error("Dataset contains no records")]
    Empty,
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
