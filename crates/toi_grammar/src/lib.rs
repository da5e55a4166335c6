//! Command grammars for Toi.
//!
//! Turns short, human-authored templates such as `"set species [to] {species}"`
//! into matchers and dispatches input lines to the command they describe.
//!
//! # Pipeline
//!
//! 1. [`template`] - parse a template string into pieces
//! 2. [`compiler`] - build a [`Matcher`] tree from the pieces, asking a
//!    [`CaptureContext`] for one resolver per capture slot
//! 3. [`matcher`] - run the tree against an input line, producing a
//!    [`CaptureSet`]
//! 4. [`command`] - hold a stage's commands and pick the one a line means
//!
//! # Example
//!
//! ```
//! use toi_grammar::{CaptureContext, CaptureKind, compile};
//!
//! let ctx = CaptureContext::default();
//! let matcher = compile(&["call [the] party {name}"], &ctx).unwrap();
//!
//! let captures = matcher.match_line("Call the party  Iron Wolves").unwrap();
//! assert_eq!(captures.text(CaptureKind::Name), Some("iron wolves"));
//! assert!(matcher.match_line("call the party").is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capture;
pub mod command;
pub mod compiler;
pub mod matcher;
pub mod template;

pub use capture::{CaptureContext, CaptureKind, CaptureResolver, CaptureSet, Captured};
pub use command::{CommandRegistry, Dispatch};
pub use compiler::{InvalidTemplate, compile, compile_template};
pub use matcher::Matcher;
pub use template::{Piece, TemplateError, parse};
