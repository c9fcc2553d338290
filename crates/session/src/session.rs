//! SearchSession: the keystroke-to-result loop.
//!
//! Every call receives a full snapshot of the notes and the current query
//! text, runs the tiered filter synchronously, and replaces the stored
//! result. Calls are bounded and never suspend, so the only ordering
//! guarantee a driver needs is last-write-wins: the session always holds
//! the result of the most recently issued query.

use note_store::Note;
use search::{MatchSpan, SearchFilter, highlight_matches};
use tracing::{debug, warn};

/// The outcome of one query: which notes survived, for which query text.
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    pub query: String,
    pub notes: Vec<Note>,
}

impl FilterResult {
    /// Highlight spans for each result title, as (result index, spans).
    ///
    /// Indices with no spans are omitted. A malformed pattern degrades to
    /// "no highlighting" with a warning, per the recovery contract: a bad
    /// query must never take down the caller.
    pub fn title_spans(&self) -> Vec<(usize, Vec<MatchSpan>)> {
        self.spans_for(|note| &note.title)
    }

    /// Highlight spans for each result body, as (result index, spans).
    pub fn body_spans(&self) -> Vec<(usize, Vec<MatchSpan>)> {
        self.spans_for(|note| &note.body)
    }

    fn spans_for(&self, field: fn(&Note) -> &str) -> Vec<(usize, Vec<MatchSpan>)> {
        let mut out = Vec::new();
        for (idx, note) in self.notes.iter().enumerate() {
            match highlight_matches(field(note), &self.query) {
                Ok(spans) if !spans.is_empty() => out.push((idx, spans)),
                Ok(_) => {}
                Err(err) => {
                    warn!(query = %self.query, %err, "highlighting suppressed");
                    return Vec::new();
                }
            }
        }
        out
    }
}

/// Drives the search core from query-changed events.
pub struct SearchSession {
    filter: SearchFilter,
    result: FilterResult,
}

impl SearchSession {
    /// Create a session with the standard title-then-body tiers.
    pub fn new() -> Self {
        Self::with_filter(SearchFilter::with_default_tiers())
    }

    /// Create a session around a custom filter configuration.
    pub fn with_filter(filter: SearchFilter) -> Self {
        Self {
            filter,
            result: FilterResult::default(),
        }
    }

    /// The user edited the query. Runs the filter over `notes` and
    /// replaces the stored result (last-write-wins).
    pub fn on_query_changed(&mut self, notes: &[Note], query: &str) -> &FilterResult {
        let hits = self.filter.apply(notes, query);
        debug!(query, input = notes.len(), output = hits.len(), "query evaluated");
        self.result = FilterResult {
            query: query.to_string(),
            notes: hits,
        };
        &self.result
    }

    /// The user cleared/cancelled the search. Resets to the full list.
    pub fn on_query_cleared(&mut self, notes: &[Note]) -> &FilterResult {
        self.on_query_changed(notes, "")
    }

    /// The most recently computed result.
    pub fn result(&self) -> &FilterResult {
        &self.result
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new("Milk run", "pickup"),
            Note::new("Work", "milk needed"),
            Note::new("Ideas", "write tests"),
        ]
    }

    #[test]
    fn test_last_write_wins() {
        let notes = sample_notes();
        let mut session = SearchSession::new();

        session.on_query_changed(&notes, "milk");
        session.on_query_changed(&notes, "tests");

        // Only the second query's result survives.
        let result = session.result();
        assert_eq!(result.query, "tests");
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].title, "Ideas");
    }

    #[test]
    fn test_clear_restores_full_list() {
        let notes = sample_notes();
        let mut session = SearchSession::new();

        session.on_query_changed(&notes, "milk");
        let result = session.on_query_cleared(&notes);

        assert_eq!(result.notes, notes);
        assert_eq!(result.query, "");
    }

    #[test]
    fn test_title_tier_policy_flows_through() {
        let notes = sample_notes();
        let mut session = SearchSession::new();

        // "milk" hits a title, so the body-only match on "Work" is excluded.
        let result = session.on_query_changed(&notes, "milk");
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].title, "Milk run");
    }

    #[test]
    fn test_title_spans_for_result() {
        let notes = sample_notes();
        let mut session = SearchSession::new();

        let result = session.on_query_changed(&notes, "milk");
        let spans = result.title_spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].0, 0);
        assert_eq!(spans[0].1, vec![MatchSpan::new(0, 4)]);
    }

    #[test]
    fn test_bad_pattern_suppresses_spans_quietly() {
        let notes = vec![Note::new("[bracket]", "body")];
        let mut session = SearchSession::new();

        // "[" matches the title as a substring, so filtering succeeds...
        let result = session.on_query_changed(&notes, "[");
        assert_eq!(result.notes.len(), 1);

        // ...but it is not a valid pattern, so spans degrade to empty.
        assert!(result.title_spans().is_empty());
    }

    #[test]
    fn test_empty_query_result_has_no_spans() {
        let notes = sample_notes();
        let mut session = SearchSession::new();
        let result = session.on_query_changed(&notes, "");
        assert!(result.title_spans().is_empty());
    }
}
