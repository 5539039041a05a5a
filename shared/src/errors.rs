//! Shared error types for the impact dashboard

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl SharedError {
    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange { field, value, min, max }
    }

    /// True when the error was caused by caller-supplied input
    pub fn is_input_error(&self) -> bool {
        matches!(self, SharedError::OutOfRange { .. })
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
