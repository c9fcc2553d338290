//! Error types for the note-store crate.

use crate::types::NoteId;
use thiserror::Error;

/// Errors that can occur while loading, saving, or mutating the store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error occurred while reading or writing the store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file exists but could not be parsed as a note collection
    #[error("Corrupt store file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Store could not be serialized for saving
    #[error("Failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Referenced note doesn't exist
    #[error("No note with id {id}")]
    NoteNotFound { id: NoteId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
