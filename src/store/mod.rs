//! Persistence of the tracker [`Record`].
//!
//! Both failure classes (a record that cannot be read and one that cannot be
//! written) go through [`FailurePolicy`]: the CLI runs best-effort, tests can
//! ask for the raw error.

pub mod json_file;
pub mod memory;

use tracing::warn;

use crate::errors::AppResult;
use crate::models::Record;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// What to do when the store fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Unreadable → default record, unwritable → dropped. Both logged.
    #[default]
    BestEffort,
    /// Return the error to the caller.
    Strict,
}

/// Interface for abstracting storage of the record.
pub trait RecordStore {
    /// Reads the stored record. Missing or malformed data is an error.
    fn try_load(&self) -> AppResult<Record>;

    /// Overwrites the stored record.
    fn try_save(&self, record: &Record) -> AppResult<()>;

    fn load(&self, policy: FailurePolicy) -> AppResult<Record> {
        match self.try_load() {
            Ok(record) => Ok(record),
            Err(e) if policy == FailurePolicy::BestEffort => {
                warn!("falling back to an empty record: {e}");
                Ok(Record::default())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, record: &Record, policy: FailurePolicy) -> AppResult<()> {
        match self.try_save(record) {
            Ok(()) => Ok(()),
            Err(e) if policy == FailurePolicy::BestEffort => {
                warn!("record not saved: {e}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
