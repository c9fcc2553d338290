//! Error types for the search crate.

use thiserror::Error;

/// Errors that can occur while searching.
///
/// A bad pattern is the only failure mode: filtering itself cannot fail,
/// and "no matches" is a normal empty result, never an error.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query, after trimming and diacritic folding, is not a valid
    /// regular-expression pattern.
    ///
    /// Callers are expected to recover by suppressing highlighting; this
    /// is never fatal to the surrounding application.
    #[error("invalid search pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
