//! Matcher for the note body field.
//!
//! Bodies are the fallback tier, consulted only when no title matched.

use super::{NoteMatcher, contains_ci};
use note_store::Note;

/// Matches notes whose body contains the query, case-insensitively.
pub struct BodyMatcher;

impl NoteMatcher for BodyMatcher {
    fn name(&self) -> &str {
        "BodyMatcher"
    }

    fn matches(&self, note: &Note, query: &str) -> bool {
        contains_ci(&note.body, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_matcher() {
        let matcher = BodyMatcher;
        let note = Note::new("Work", "buy milk for office");

        assert!(matcher.matches(&note, "MILK"));
        assert!(!matcher.matches(&note, "work"));
    }
}
