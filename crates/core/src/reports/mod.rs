//! Financial report generation.
//!
//! This module provides pure business logic for generating financial reports:
//! - Trial Balance (chart of accounts left-joined to the ledger summary)
//! - Income Statement (fixed formulas over the trial balance)
//! - Balance Sheet (net amounts of fixed accounts)
//!
//! The income statement and balance sheet read only the trial balance, never
//! the raw ledger.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
