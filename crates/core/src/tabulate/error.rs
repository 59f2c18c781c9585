//! Tabulation error types.

use thiserror::Error;

/// Errors that can occur while tabulating a sheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabulateError {
    /// Calculation name is not `sum` or `average`.
    #[error("Unsupported calculation: {0}")]
    UnsupportedCalculation(String),

    /// Request string is not `LABEL=CALCULATION`.
    #[error("Malformed calculation request: {0}")]
    MalformedRequest(String),

    /// Average requested over a row with no values.
    #[error("No values to average for '{0}'")]
    EmptyInput(String),

    /// A value cell holds text that is not a number.
    #[error("Non-numeric value '{value}' in row '{label}'")]
    NonNumeric {
        /// Row label.
        label: String,
        /// Offending cell text.
        value: String,
    },

    /// Result exceeds decimal range.
    #[error("Calculation overflow for '{0}'")]
    Overflow(String),
}
