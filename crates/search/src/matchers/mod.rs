//! Matcher implementations for the search filter.
//!
//! A matcher is a per-note predicate for a single field. Matchers never
//! decide policy (which field wins over which); that is the filter's job.

pub mod title;
pub mod body;

// Re-export for convenience
pub use title::TitleMatcher;
pub use body::BodyMatcher;

use note_store::Note;

/// Core trait for matching a note against a query.
///
/// ## Design Note
/// - `Send + Sync` allows matchers to be shared freely
/// - Matchers are pure predicates: no state, no failure mode
pub trait NoteMatcher: Send + Sync {
    /// Returns the name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// Does `note` match `query`?
    fn matches(&self, note: &Note, query: &str) -> bool;
}

/// Case-insensitive substring containment with Unicode-aware lowercasing.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ci_basic() {
        assert!(contains_ci("Buy Milk for office", "milk"));
        assert!(contains_ci("MILK RUN", "Milk"));
        assert!(!contains_ci("Groceries", "milk"));
    }

    #[test]
    fn test_contains_ci_unicode_casing() {
        assert!(contains_ci("СПИСОК ПОКУПОК", "список"));
        // Empty needle is contained in everything, matching str::contains
        assert!(contains_ci("anything", ""));
    }
}
