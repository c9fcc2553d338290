//! Highlight-span computation for matched text.
//!
//! The query is used as a case-insensitive regular-expression pattern over
//! a diacritic-folded copy of the text. Because folding is one-to-one per
//! character, a character offset in the folded text is the same character
//! offset in the original, so spans are reported against the original text
//! even though matching ran against the folded copy.
//!
//! The query is NOT escaped: a caller that wants literal-only matching
//! must escape metacharacters itself (`regex::escape`). This mirrors the
//! original behaviour, where the raw query went straight into the pattern.

use crate::error::SearchError;
use crate::fold::fold_diacritics;
use regex::RegexBuilder;

/// A half-open character-offset range `[start, end)` denoting a match
/// within a text. A rendering instruction only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute highlight spans for `query` within `text`.
///
/// ## Algorithm
/// 1. Trim the query of surrounding whitespace/newlines and fold diacritics.
/// 2. Compile it as a case-insensitive pattern.
/// 3. Fold `text` the same way and collect one span per non-overlapping
///    match, left to right, as character offsets.
///
/// An empty (post-trim) query yields no spans. Zero-length matches are
/// skipped; highlighting nothing is not a useful rendering instruction.
///
/// # Errors
/// [`SearchError::Pattern`] if the trimmed, folded query is not a valid
/// pattern. Callers should treat this as "no highlighting applied".
pub fn highlight_matches(text: &str, query: &str) -> Result<Vec<MatchSpan>, SearchError> {
    let pattern = fold_diacritics(query.trim());
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| SearchError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

    let folded = fold_diacritics(text);

    let mut spans = Vec::new();
    // Byte offsets into the folded text differ from the original (folding
    // can shrink multi-byte letters to ASCII), but char offsets line up
    // exactly, so convert before reporting.
    let mut chars_before = 0;
    let mut bytes_before = 0;
    for m in regex.find_iter(&folded) {
        if m.start() == m.end() {
            continue;
        }
        chars_before += folded[bytes_before..m.start()].chars().count();
        let span_chars = folded[m.start()..m.end()].chars().count();
        spans.push(MatchSpan::new(chars_before, chars_before + span_chars));
        chars_before += span_chars;
        bytes_before = m.end();
    }
    Ok(spans)
}
