//! Error types for the schedule conversion.
//!
//! Two levels, mirroring the two failure kinds a run can report:
//!
//! - [`CsvError`] - reading, decoding or writing a delimited table
//! - [`ConvertError`] - top-level conversion errors, including the
//!   missing input file which is checked before anything is read
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or writing a CSV table.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes could not be decoded.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Malformed record or serialization failure.
    #[error("Invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error returned by [`crate::transform::pipeline::run_conversion`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("Input file '{}' not found.", .0.display())]
    MissingInputFile(PathBuf),

    /// Anything that went wrong while reading, reshaping or writing.
    #[error("{0}")]
    Conversion(#[from] CsvError),
}

impl ConvertError {
    /// True when the run never started because the input was absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInputFile(_))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
