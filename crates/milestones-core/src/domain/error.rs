//! Error taxonomy for roster loading and run-date parsing.

use std::path::PathBuf;

/// Date format expected for hire dates and the run date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Roster and input errors.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error(
        "There has been an error locating the input file. Please make sure this file exists {}",
        .path.display()
    )]
    InputNotFound { path: PathBuf },

    #[error(
        "There has been an error parsing the run date. Please correct this date '{value}' \
         so that it follows the '2011-03-24' date format."
    )]
    InvalidRunDate { value: String },

    #[error("The header row in the {} CSV file must be {expected}", .path.display())]
    HeaderMismatch { path: PathBuf, expected: String },

    #[error(
        "There has been an error parsing a date in the input file. Please correct '{value}' \
         at line '{row}' so that it follows the '2011-03-24' date format."
    )]
    InvalidHireDate {
        path: PathBuf,
        value: String,
        row: usize,
    },

    #[error("malformed row {row}: expected at least 5 fields, got {fields}")]
    MalformedRow { row: usize, fields: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
