//! NoteStore: an insertion-ordered note collection with JSON persistence.
//!
//! The store is deliberately simple: an ordered `Vec` of entries plus a
//! monotonic id counter, saved as pretty-printed JSON. There is no index
//! structure; the search core works over a full snapshot on every query.

use crate::error::{Result, StoreError};
use crate::types::{Note, NoteEntry, NoteId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Insertion-ordered collection of notes.
///
/// Invariants:
/// - `entries` preserves insertion order; listing and searching both see
///   notes in the order they were added.
/// - `next_id` is strictly greater than every id in `entries`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NoteStore {
    next_id: NoteId,
    entries: Vec<NoteEntry>,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notes in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new note and return its assigned id.
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(NoteEntry {
            id,
            note: Note::new(title, body),
        });
        debug!(id, count = self.entries.len(), "note added");
        id
    }

    /// Look up a note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.note)
    }

    /// Replace the title and body of an existing note.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::NoteNotFound { id })?;
        entry.note = Note::new(title, body);
        Ok(())
    }

    /// Remove a note by id, returning it.
    pub fn remove(&mut self, id: NoteId) -> Result<Note> {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::NoteNotFound { id })?;
        Ok(self.entries.remove(pos).note)
    }

    /// All entries (id + note) in insertion order.
    pub fn entries(&self) -> &[NoteEntry] {
        &self.entries
    }

    /// An owned, insertion-ordered snapshot of the notes.
    ///
    /// This is what gets handed to the search core: a fresh copy per query,
    /// so a query never observes store mutation mid-flight.
    pub fn snapshot(&self) -> Vec<Note> {
        self.entries.iter().map(|entry| entry.note.clone()).collect()
    }

    /// Load a store from a JSON file.
    ///
    /// A missing file is not an error: it means first launch, and yields an
    /// empty store. A file that exists but doesn't parse is reported as
    /// [`StoreError::Corrupt`] rather than silently discarded.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "store file not found, starting empty");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let store: NoteStore =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?;
        debug!(path = %path.display(), count = store.len(), "store loaded");
        Ok(store)
    }

    /// Save the store as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(StoreError::Serialize)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), count = self.len(), "store saved");
        Ok(())
    }
}
