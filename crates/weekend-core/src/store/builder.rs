//! Builder for creating and configuring store instances.

use std::fs;
use std::path::{Path, PathBuf};

use super::WeekendStore;
use crate::error::{Result, StoreError};
use crate::persist::Storage;

/// Builder for creating and configuring [`WeekendStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    storage_path: Option<PathBuf>,
    in_memory: bool,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom persisted-state blob path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/weekend/weekend.json` or
    /// `~/.local/share/weekend/weekend.json`
    pub fn with_storage_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Disables persistence entirely; the store lives in memory only.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Builds the configured store, loading persisted state once.
    ///
    /// A missing or corrupt blob yields an empty store rather than an
    /// error; only path resolution and directory creation can fail.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the storage directory cannot be
    /// created, and `StoreError::XdgDirectory` if no default path can be
    /// resolved.
    pub fn build(self) -> Result<WeekendStore> {
        if self.in_memory {
            return Ok(WeekendStore::new());
        }

        let path = match self.storage_path {
            Some(path) => path,
            None => Storage::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::file_system(parent, e))?;
        }

        let storage = Storage::new(path);
        let state = storage.load();
        Ok(WeekendStore::with_storage(state, storage))
    }
}
