//! Error handling for Tauri commands
//!
//! Core errors are converted into `CommandError`, which is serializable so
//! the frontend can tell a persistence failure from an empty selection.

use ditto_core::{ClipboardAccessError, PersistenceError, SettingsError};
use serde::Serialize;
use thiserror::Error;

/// Command execution errors
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CommandError {
    /// History file could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Clipboard read/write failed
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Copy was invoked with nothing selected
    #[error("No text selected!")]
    SelectionEmpty,

    #[error("Settings error: {0}")]
    Settings(String),

    /// Window or tray operation error
    #[error("Window error: {0}")]
    WindowError(String),
}

impl From<PersistenceError> for CommandError {
    fn from(err: PersistenceError) -> Self {
        CommandError::Persistence(err.to_string())
    }
}

impl From<ClipboardAccessError> for CommandError {
    fn from(err: ClipboardAccessError) -> Self {
        CommandError::ClipboardError(err.0)
    }
}

impl From<SettingsError> for CommandError {
    fn from(err: SettingsError) -> Self {
        CommandError::Settings(err.to_string())
    }
}

impl From<tauri::Error> for CommandError {
    fn from(err: tauri::Error) -> Self {
        CommandError::WindowError(err.to_string())
    }
}

// Helper type alias for command results
pub type CommandResult<T> = Result<T, CommandError>;
