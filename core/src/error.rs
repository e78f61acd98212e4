//! Error types for sortbench-core

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// None of the candidate files could be opened and parsed
    #[error("no results file found (tried: {})", display_paths(.attempted))]
    InputNotFound {
        /// Every path that was probed, in order
        attempted: Vec<PathBuf>,
    },

    /// Requested column name is not present
    #[error("column '{name}' not found (available: {})", .available.join(", "))]
    ColumnNotFound {
        /// Name that was requested
        name: String,
        /// Names that were loaded
        available: Vec<String>,
    },

    /// Requested column index falls outside the sheet
    #[error("column index {index} is invalid (the sheet has {count} columns)")]
    ColumnIndexOutOfRange {
        /// Index that was requested; negative counts from the last column
        index: isize,
        /// Number of loaded columns
        count: usize,
    },

    /// Coercion left nothing to write
    #[error("column '{0}' contains no valid numeric values")]
    NoNumericData(String),

    /// Spreadsheet could not be opened or decoded
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// CSV read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
