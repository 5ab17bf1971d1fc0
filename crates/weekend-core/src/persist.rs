//! Persistence adapter for the scheduling store.
//!
//! The store's transition logic is pure and free of I/O; this module wraps
//! it with a thin adapter that serializes the three persisted fields to a
//! single JSON blob on disk. Persistence is write-through and best-effort:
//! a failed save is logged and swallowed, and a missing or corrupt blob
//! loads as the empty state. The planning flow is never blocked by storage.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::models::{ScheduledActivity, WeekendPlan};

/// The exact record written to durable storage.
///
/// Exactly three fields are persisted: the scheduled-activity list, the
/// saved plan snapshot, and the selected theme id. Any other in-memory
/// store state is excluded by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedState {
    /// The live scheduled-activity list
    #[serde(default)]
    pub scheduled: Vec<ScheduledActivity>,

    /// The most recently saved plan snapshot, if any
    #[serde(default)]
    pub current_plan: Option<WeekendPlan>,

    /// The selected theme id, if any
    #[serde(default)]
    pub selected_theme: Option<String>,
}

/// File-backed storage for the persisted state blob.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage adapter for the given blob path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the default blob path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/weekend/weekend.json` or
    /// `~/.local/share/weekend/weekend.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("weekend")
            .place_data_file("weekend.json")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }

    /// The path this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state, treating missing or corrupt blobs as the
    /// empty state. Corruption is diagnosed but never fatal.
    pub fn load(&self) -> PersistedState {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no persisted state at {}", self.path.display());
                return PersistedState::default();
            }
            Err(err) => {
                log::warn!(
                    "could not read persisted state at {}: {err}",
                    self.path.display()
                );
                return PersistedState::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(err) => {
                log::warn!(
                    "corrupt persisted state at {}: {err}; starting empty",
                    self.path.display()
                );
                PersistedState::default()
            }
        }
    }

    /// Writes the persisted state blob.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the directory or file cannot be
    /// written, and `StoreError::Serialization` if encoding fails. Callers
    /// on the mutation path are expected to log and swallow these.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::file_system(parent, e))?;
        }
        let bytes = serde_json::to_vec_pretty(state)?;
        fs::write(&self.path, bytes).map_err(|e| StoreError::file_system(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_blob_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = Storage::new(temp_dir.path().join("weekend.json"));
        assert_eq!(storage.load(), PersistedState::default());
    }

    #[test]
    fn test_load_corrupt_blob_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("weekend.json");
        fs::write(&path, b"{ not json").expect("Failed to write blob");

        let storage = Storage::new(&path);
        assert_eq!(storage.load(), PersistedState::default());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("weekend.json");

        let storage = Storage::new(&path);
        storage
            .save(&PersistedState::default())
            .expect("Failed to save state");
        assert!(path.exists());
        assert_eq!(storage.load(), PersistedState::default());
    }
}
