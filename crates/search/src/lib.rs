//! Search core: tiered note filtering and match highlighting.
//!
//! This crate provides:
//! - NoteMatcher trait and the built-in title/body matchers
//! - SearchFilter for composing matchers into fallback tiers
//! - highlight_matches for computing highlight spans in matched text
//! - Diacritic folding used by the highlighter
//!
//! ## Architecture
//! A query is answered in two independent steps:
//! 1. SearchFilter narrows the note list (tier by tier, first non-empty
//!    tier wins)
//! 2. highlight_matches computes character spans inside displayed text so
//!    the presentation layer can render matches
//!
//! Both steps are pure, synchronous transformations over a snapshot of the
//! notes; neither mutates its input.
//!
//! ## Example Usage
//! ```ignore
//! use search::{SearchFilter, highlight_matches};
//!
//! let filter = SearchFilter::with_default_tiers();
//! let hits = filter.apply(&notes, "milk");
//!
//! for note in &hits {
//!     let spans = highlight_matches(&note.title, "milk")?;
//!     render(&note.title, &spans);
//! }
//! ```

pub mod error;
pub mod fold;
pub mod matchers;
pub mod filter;
pub mod highlight;

// Re-export main types
pub use error::SearchError;
pub use fold::fold_diacritics;
pub use matchers::NoteMatcher;
pub use filter::SearchFilter;
pub use highlight::{MatchSpan, highlight_matches};
