//! Workbook persistence.
//!
//! The processor never touches files directly; it loads and saves whole
//! workbooks through a [`WorkbookStore`].

mod memory;
mod xlsx;

pub use memory::MemoryStore;
pub use xlsx::XlsxStore;

use crate::error::WorkbookResult;
use crate::model::Workbook;

/// Loads and saves a whole workbook.
pub trait WorkbookStore: Send + Sync {
    /// Loads every sheet into memory.
    fn load(&self) -> WorkbookResult<Workbook>;

    /// Persists the workbook, replacing what was stored.
    fn save(&self, workbook: &Workbook) -> WorkbookResult<()>;
}
