//! Core business logic for Ledgerbook.
//!
//! This crate contains pure business logic with ZERO spreadsheet or filesystem
//! dependencies. Callers read rows out of a workbook, hand them to these
//! functions, and persist whatever comes back.
//!
//! # Modules
//!
//! - `ledger` - General Ledger aggregation into per-account totals
//! - `accounts` - Chart of Accounts index
//! - `reports` - Trial Balance, Income Statement and Balance Sheet derivation
//! - `tabulate` - Sum/average over labelled rows

pub mod accounts;
pub mod ledger;
pub mod reports;
pub mod tabulate;

pub use ledgerbook_shared::AccountCode;
