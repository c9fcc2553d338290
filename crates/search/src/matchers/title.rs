//! Matcher for the note title field.
//!
//! Titles are the first tier: if any title contains the query, the result
//! list is built from titles alone and note bodies are never consulted.

use super::{NoteMatcher, contains_ci};
use note_store::Note;

/// Matches notes whose title contains the query, case-insensitively.
pub struct TitleMatcher;

impl NoteMatcher for TitleMatcher {
    fn name(&self) -> &str {
        "TitleMatcher"
    }

    fn matches(&self, note: &Note, query: &str) -> bool {
        contains_ci(&note.title, query)
    }
}
