//! Report generation error types.

use thiserror::Error;

/// Errors that can occur while deriving a report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A report amount left the decimal range.
    #[error("Amount overflow while computing {0}")]
    Overflow(String),
}

impl ReportError {
    pub(crate) fn overflow(line: impl Into<String>) -> Self {
        Self::Overflow(line.into())
    }
}
