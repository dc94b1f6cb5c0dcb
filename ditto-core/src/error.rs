//! Error taxonomy for the clipboard history core.
//!
//! Every error here is recoverable where it originates: the watcher retries
//! on the next tick and the UI layer turns the rest into notifications.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load or save the history file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The file could not be read or written (permissions, disk full, ...)
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON array of strings
    #[error("Malformed history file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode history for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            PersistenceError::Io { path, .. }
            | PersistenceError::Malformed { path, .. }
            | PersistenceError::Encode { path, .. } => path,
        }
    }
}

/// Transient failure to read or write the OS clipboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Clipboard error: {0}")]
pub struct ClipboardAccessError(pub String);

impl ClipboardAccessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure to resolve, read or write the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to determine config directory")]
    NoConfigDir,

    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
