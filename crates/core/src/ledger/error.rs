//! Ledger aggregation error types.

use thiserror::Error;

use crate::AccountCode;

/// Errors that can occur while aggregating the ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// An account's running total left the decimal range.
    #[error("Amount overflow while totalling account {0}")]
    Overflow(AccountCode),
}
