//! Integration tests for the toi_grammar crate.
//!
//! - Template compilation and matching properties
//! - Capture resolution against live collections
//! - Command dispatch

mod captures;
mod dispatch;
mod matching;
