//! The SearchFilter composes matchers into fallback tiers.
//!
//! Tiers are ordered: the first tier that matches anything supplies the
//! whole result, and later tiers are never consulted. This reproduces the
//! original application's behaviour exactly: a search runs over titles
//! first, and only when no title matches does it fall back to bodies. A
//! single title hit therefore suppresses body-only hits; the two tiers are
//! never unioned.

use crate::matchers::{BodyMatcher, NoteMatcher, TitleMatcher};
use note_store::Note;
use tracing::debug;

/// Tiered, order-preserving note filter.
///
/// ## Usage
/// ```ignore
/// let filter = SearchFilter::with_default_tiers();
/// let hits = filter.apply(&notes, "milk");
/// ```
pub struct SearchFilter {
    tiers: Vec<Box<dyn NoteMatcher>>,
}

impl SearchFilter {
    /// Create a filter with no tiers. A tierless filter matches nothing
    /// (except the empty query, which always returns everything).
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Append a fallback tier (builder pattern).
    pub fn add_tier(mut self, matcher: impl NoteMatcher + 'static) -> Self {
        self.tiers.push(Box::new(matcher));
        self
    }

    /// The standard configuration: title tier, then body tier.
    pub fn with_default_tiers() -> Self {
        Self::new().add_tier(TitleMatcher).add_tier(BodyMatcher)
    }

    /// Filter `notes` against `query`.
    ///
    /// ## Algorithm
    /// 1. Empty query: return every note unchanged (no filtering).
    /// 2. For each tier in order, collect the notes that match, preserving
    ///    input order.
    /// 3. Return the first non-empty tier result; if every tier comes up
    ///    empty, return an empty list.
    ///
    /// The input is never mutated; the result is always an order-preserving
    /// subset of `notes`.
    pub fn apply(&self, notes: &[Note], query: &str) -> Vec<Note> {
        if query.is_empty() {
            return notes.to_vec();
        }

        for matcher in &self.tiers {
            let hits: Vec<Note> = notes
                .iter()
                .filter(|note| matcher.matches(note, query))
                .cloned()
                .collect();
            debug!(
                tier = matcher.name(),
                input = notes.len(),
                output = hits.len(),
                "tier evaluated"
            );
            if !hits.is_empty() {
                return hits;
            }
        }

        Vec::new()
    }
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::with_default_tiers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new("Groceries", "milk, eggs"),
            Note::new("Work", "buy milk for office"),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let filter = SearchFilter::with_default_tiers();
        let notes = sample_notes();
        assert_eq!(filter.apply(&notes, ""), notes);
    }

    #[test]
    fn test_body_fallback_when_no_title_matches() {
        // Neither title contains "milk", both bodies do: the body tier
        // supplies both notes, order preserved.
        let filter = SearchFilter::with_default_tiers();
        let notes = sample_notes();
        let hits = filter.apply(&notes, "milk");
        assert_eq!(hits, notes);
    }

    #[test]
    fn test_title_hit_suppresses_body_hits() {
        // The first title matches, so the second note is excluded even
        // though its body also contains "milk".
        let filter = SearchFilter::with_default_tiers();
        let notes = vec![
            Note::new("Milk run", "pickup"),
            Note::new("Work", "milk needed"),
        ];
        let hits = filter.apply(&notes, "milk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Milk run");
    }

    #[test]
    fn test_no_match_anywhere_is_empty() {
        let filter = SearchFilter::with_default_tiers();
        let hits = filter.apply(&sample_notes(), "xyzzy");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let filter = SearchFilter::with_default_tiers();
        let notes = vec![Note::new("GROCERIES", "")];
        assert_eq!(filter.apply(&notes, "groceries").len(), 1);
    }

    #[test]
    fn test_result_preserves_relative_order() {
        let filter = SearchFilter::with_default_tiers();
        let notes = vec![
            Note::new("b milk", ""),
            Note::new("other", ""),
            Note::new("a milk", ""),
        ];
        let hits = filter.apply(&notes, "milk");
        let titles: Vec<&str> = hits.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b milk", "a milk"]);
    }

    #[test]
    fn test_tierless_filter_matches_nothing() {
        let filter = SearchFilter::new();
        let notes = sample_notes();
        assert!(filter.apply(&notes, "milk").is_empty());
        assert_eq!(filter.apply(&notes, ""), notes);
    }

    #[test]
    fn test_empty_note_list() {
        let filter = SearchFilter::with_default_tiers();
        assert!(filter.apply(&[], "milk").is_empty());
        assert!(filter.apply(&[], "").is_empty());
    }
}
