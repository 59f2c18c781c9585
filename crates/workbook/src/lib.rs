//! Workbook boundary for Ledgerbook.
//!
//! Every top-level operation follows the same shape: load the workbook into
//! memory, read the source sheets through their layouts, hand the rows to
//! `ledgerbook-core`, write the derived report back at its fixed position,
//! then save once.
//!
//! # Modules
//!
//! - `model` - In-memory workbook, sheets and cell values
//! - `schema` - Layout resolution and row access
//! - `source` - Sheet readers producing core inputs
//! - `sink` - Sheet writers for derived reports
//! - `store` - Persistence (`.xlsx` files, in-memory)
//! - `processor` - Load, transform, save orchestration

pub mod error;
pub mod model;
pub mod processor;
pub mod schema;
pub mod sink;
pub mod source;
pub mod store;

pub use error::{WorkbookError, WorkbookResult};
pub use model::{CellValue, Sheet, Workbook};
pub use processor::{LedgerProcessor, ReportBundle};
pub use store::{MemoryStore, WorkbookStore, XlsxStore};
