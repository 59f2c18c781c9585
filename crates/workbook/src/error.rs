//! Workbook error types.

use ledgerbook_core::ledger::LedgerError;
use ledgerbook_core::reports::ReportError;
use ledgerbook_core::tabulate::TabulateError;
use ledgerbook_shared::AppError;
use thiserror::Error;

/// Result type alias using `WorkbookError`.
pub type WorkbookResult<T> = Result<T, WorkbookError>;

/// Errors raised while reading, transforming or saving a workbook.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// A required sheet does not exist. Raised before any write.
    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    /// A header-referenced column is absent from the header row.
    #[error("Column '{header}' not found in header row of sheet '{sheet}'")]
    UnknownColumn {
        /// Sheet name.
        sheet: String,
        /// Header text that was looked up.
        header: String,
    },

    /// The layout cannot address the sheet (column or row 0).
    #[error("Invalid layout for sheet '{sheet}': {reason}")]
    InvalidLayout {
        /// Sheet name.
        sheet: String,
        /// What is wrong.
        reason: String,
    },

    /// The workbook could not be loaded or saved. No rollback is attempted.
    #[error("Workbook persistence failed: {0}")]
    Persistence(String),

    /// Ledger aggregation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A report could not be derived.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Tabulation failed.
    #[error(transparent)]
    Tabulate(#[from] TabulateError),
}

impl WorkbookError {
    /// Create a missing sheet error.
    #[must_use]
    pub fn missing_sheet(name: impl Into<String>) -> Self {
        Self::MissingSheet(name.into())
    }

    /// Create an invalid layout error.
    #[must_use]
    pub fn invalid_layout(sheet: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            sheet: sheet.into(),
            reason: reason.into(),
        }
    }

    /// Create a persistence error.
    #[must_use]
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

impl From<WorkbookError> for AppError {
    fn from(err: WorkbookError) -> Self {
        match err {
            WorkbookError::MissingSheet(_) | WorkbookError::UnknownColumn { .. } => {
                Self::NotFound(err.to_string())
            }
            WorkbookError::InvalidLayout { .. } => Self::Configuration(err.to_string()),
            WorkbookError::Persistence(msg) => Self::Persistence(msg),
            WorkbookError::Ledger(_) | WorkbookError::Report(_) | WorkbookError::Tabulate(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
