//! Error types for window-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    /// A time string did not match `HH:MM` (two digits each, 24-hour clock).
    #[error("Invalid time in {field}: '{value}' (expected HH:MM)")]
    Parse { field: String, value: String },

    /// A busy record lacks `start` or `stop`.
    #[error("Missing required field {field}")]
    MissingField { field: String },

    /// Two busy intervals share time and overlap is not allowed.
    #[error("Busy intervals overlap by {minutes} min: {first} and {second}")]
    Overlap {
        first: String,
        second: String,
        minutes: i64,
    },

    #[error("Range error: {0}")]
    Range(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WindowError {
    /// True for errors raised while validating busy records
    /// (as opposed to parse, range, or I/O failures).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WindowError::MissingField { .. } | WindowError::Overlap { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WindowError>;
