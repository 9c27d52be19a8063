use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::Record;

/// The record kept as a small pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn try_load(&self) -> AppResult<Record> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::RecordNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let record: Record = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), ?record, "record loaded");
        Ok(record)
    }

    fn try_save(&self, record: &Record) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut json = serde_json::to_string_pretty(record)?;
        json.push('\n');
        fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), ?record, "record saved");
        Ok(())
    }
}
