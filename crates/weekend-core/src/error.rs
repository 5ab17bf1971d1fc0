//! Error types for the weekend planning library.
//!
//! The error surface is deliberately small: store mutations are total
//! functions that never fail, so errors only arise while constructing a
//! store or inside the persistence adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for store construction and persistence operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
