//! Error types for insole table I/O.

use std::path::PathBuf;

use insole_layout::LayoutError;
use thiserror::Error;

/// Result type for insole I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading insole tables.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A required column is absent from the header.
    #[error("{table} table is missing column '{column}'")]
    MissingColumn {
        /// Table being read.
        table: &'static str,
        /// Column name.
        column: String,
    },

    /// A cell could not be parsed as a number.
    #[error("line {line}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        /// 1-based line in the file.
        line: u64,
        /// Column name.
        column: String,
        /// Cell text.
        value: String,
    },

    /// A foot indicator is neither left (`0`) nor right (`1`).
    #[error("line {line}: invalid foot indicator '{value}'")]
    InvalidFoot {
        /// 1-based line in the file.
        line: u64,
        /// Cell text.
        value: String,
    },

    /// Layout generation failed for an anchor.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `MissingColumn` error.
    #[must_use]
    pub fn missing_column(table: &'static str, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            table,
            column: column.into(),
        }
    }

    /// Create an `InvalidValue` error.
    #[must_use]
    pub fn invalid_value(line: u64, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            line,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Map a file-open error, turning `NotFound` into [`IoError::FileNotFound`].
    pub(crate) fn open(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io(err)
        }
    }
}
