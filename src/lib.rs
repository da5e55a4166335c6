//! Toi - command grammars and stage flows for a text-driven party builder
//!
//! This crate re-exports all layers of the Toi system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: toi_runtime     — Console I/O, game context, stages, CLI
//! Layer 3: toi_flow        — Flows, entry points, control signals
//! Layer 2: toi_grammar     — Template compiler, matchers, command dispatch
//! Layer 1: toi_data        — Species, backgrounds, party, catalogs
//! Layer 0: toi_foundation  — Core types (Error, text helpers)
//! ```

pub use toi_data as data;
pub use toi_flow as flow;
pub use toi_foundation as foundation;
pub use toi_grammar as grammar;
pub use toi_runtime as runtime;
