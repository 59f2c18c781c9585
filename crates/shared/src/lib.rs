//! Shared types, layouts, errors, and configuration for Ledgerbook.
//!
//! This crate provides common types used across all other crates:
//! - Account codes with numeric-first ordering
//! - Sheet layouts (where each report lives inside the workbook)
//! - Report templates (which account codes feed which report line)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod layout;
pub mod templates;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use layout::{
    BalanceSheetLayout, ChartLayout, ColumnRef, IncomeStatementLayout, LedgerLayout,
    SheetLayouts, TrialBalanceLayout,
};
pub use templates::{BalanceSheetTemplate, IncomeStatementTemplate, ReportTemplates, TemplateLine};
pub use types::AccountCode;
