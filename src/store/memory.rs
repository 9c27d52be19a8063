use std::cell::{Cell, RefCell};

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::Record;

/// Keeps the record in memory. Used by tests and anything that needs a
/// throwaway tracker.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<Record>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: Record) -> Self {
        let store = Self::default();
        *store.record.borrow_mut() = Some(record);
        store
    }

    /// Last saved (or seeded) record, if any.
    pub fn record(&self) -> Option<Record> {
        *self.record.borrow()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl RecordStore for MemoryStore {
    fn try_load(&self) -> AppResult<Record> {
        if self.fail_reads.get() {
            return Err(AppError::StoreUnavailable("reads disabled".into()));
        }
        self.record()
            .ok_or_else(|| AppError::StoreUnavailable("no record stored".into()))
    }

    fn try_save(&self, record: &Record) -> AppResult<()> {
        if self.fail_writes.get() {
            return Err(AppError::StoreUnavailable("writes disabled".into()));
        }
        *self.record.borrow_mut() = Some(*record);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
