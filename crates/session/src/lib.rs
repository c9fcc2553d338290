//! # Session Crate
//!
//! The query-session driver sits between user input and the search core.
//! It models the "notify me when the query changes" seam of the original
//! UI (search-field callbacks) without depending on any UI toolkit, so the
//! same code is callable from a test harness, a CLI, or a real front end.
//!
//! ## Main Components
//!
//! - **session**: SearchSession (query-changed/query-cleared entry points)
//!   and FilterResult (the last-write-wins result snapshot)

pub mod session;

pub use session::{FilterResult, SearchSession};
