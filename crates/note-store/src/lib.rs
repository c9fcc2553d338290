//! # Note Store Crate
//!
//! This crate owns the note collection: the domain types and a small
//! insertion-ordered store with trivial JSON persistence.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Note, NoteEntry, NoteId)
//! - **store**: NoteStore with add/get/update/remove and load/save
//! - **error**: Error types for store operations
//!
//! ## Example Usage
//!
//! ```ignore
//! use note_store::NoteStore;
//! use std::path::Path;
//!
//! let mut store = NoteStore::load(Path::new("notekeep.json"))?;
//! let id = store.add("Groceries", "milk, eggs");
//! store.save(Path::new("notekeep.json"))?;
//!
//! // Hand an ordered snapshot to the search core
//! let notes = store.snapshot();
//! println!("{} notes, newest id {}", notes.len(), id);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use types::{Note, NoteEntry, NoteId};
pub use store::NoteStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_creation() {
        let store = NoteStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = NoteStore::new();
        let a = store.add("first", "");
        let b = store.add("second", "");
        assert!(b > a);
        assert_eq!(store.get(a).unwrap().title, "first");
        assert_eq!(store.get(b).unwrap().title, "second");
    }
}
