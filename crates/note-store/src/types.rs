//! Core domain types for the note collection.

use serde::{Deserialize, Serialize};

/// Unique identifier for a note within a store.
///
/// Ids are assigned sequentially on insert and never reused, so `show 3`
/// keeps meaning the same note after neighbours are removed.
pub type NoteId = u64;

/// A single user-authored note: a title and a free-form body.
///
/// Notes are plain data. The search core only ever borrows them and never
/// mutates them; all mutation goes through [`crate::NoteStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A note together with its store-assigned id.
///
/// The store keeps entries in insertion order; the slice handed to callers
/// preserves that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub id: NoteId,
    pub note: Note,
}
