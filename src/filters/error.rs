//! Error types for filter input
//!
//! Evaluation itself never fails: unknown categories simply match nothing.
//! These errors cover turning user input into filter state.

use thiserror::Error;

/// Errors that can occur while building filter state from user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Expression is not of the form `category=...`
    #[error("Invalid filter expression '{0}': expected category=value")]
    InvalidExpression(String),

    /// Expression has a category but no values
    #[error("Filter expression '{0}' selects no values")]
    EmptyValues(String),

    /// A range bound is not a number
    #[error("Invalid number '{value}' in range expression '{expression}'")]
    InvalidNumber { expression: String, value: String },

    /// Chip label not offered by the combo control
    #[error("Unknown chip '{0}'")]
    UnknownChip(String),
}
