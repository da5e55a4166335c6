//! Core error types and text helpers for Toi.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`normalize`] and [`pretty_name`] - text normalization shared by
//!   grammar matching and name handling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod text;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use text::{interpolate, normalize, pretty_name};
