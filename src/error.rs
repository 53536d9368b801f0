//! Errors raised by table access and chart construction.

use thiserror::Error;

/// Failure modes of the table accessors and the plotting operations.
///
/// None of these are recovered from; they are handed back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("column '{name}' holds {found}, expected {expected}")]
    WrongColumnKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("column '{name}' has {found} rows, table has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("window size must be at least 1 (got {0})")]
    InvalidWindow(usize),

    #[error("histogram needs at least one bin")]
    InvalidBins,
}

pub type TableResult<T> = Result<T, TableError>;
