//! General Ledger aggregation.
//!
//! This module reduces raw ledger rows into per-account totals:
//! - Ledger entries (one debit/credit pair per transaction row)
//! - Account totals (running debit and credit sums)
//! - Ledger summary keyed by account code

pub mod entry;
pub mod error;
pub mod summary;

pub use entry::LedgerEntry;
pub use error::LedgerError;
pub use summary::{AccountTotals, LedgerSummary};
