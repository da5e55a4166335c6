//! Integration tests for the toi_flow crate.
//!
//! - Sub-flow calls that resume their caller
//! - Flow changes and the outermost flow

mod resumption;
mod transfer;
