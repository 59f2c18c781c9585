//! In-memory store.

use std::sync::Mutex;

use super::WorkbookStore;
use crate::error::{WorkbookError, WorkbookResult};
use crate::model::Workbook;

/// Store holding the workbook in memory and counting saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    workbook: Workbook,
    saves: usize,
}

impl MemoryStore {
    /// Creates a store seeded with `workbook`.
    #[must_use]
    pub fn new(workbook: Workbook) -> Self {
        Self {
            state: Mutex::new(MemoryState { workbook, saves: 0 }),
        }
    }

    /// Snapshot of the stored workbook.
    pub fn workbook(&self) -> WorkbookResult<Workbook> {
        self.with_state(|state| state.workbook.clone())
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> WorkbookResult<usize> {
        self.with_state(|state| state.saves)
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> WorkbookResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| WorkbookError::persistence("memory store lock poisoned"))?;
        Ok(f(&mut state))
    }
}

impl WorkbookStore for MemoryStore {
    fn load(&self) -> WorkbookResult<Workbook> {
        self.workbook()
    }

    fn save(&self, workbook: &Workbook) -> WorkbookResult<()> {
        self.with_state(|state| {
            state.workbook = workbook.clone();
            state.saves += 1;
        })
    }
}
