//! Console I/O, game stages, and the CLI for Toi.
//!
//! - [`editor`] - line editing ([`RustylineEditor`], [`ScriptedEditor`])
//! - [`io`] - the paginated say/ask port
//! - [`context`] - what every stage receives
//! - [`stages`] - the game's flows
//! - [`config`] - settings gathered by the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod editor;
pub mod io;
pub mod stages;

pub use config::GameConfig;
pub use context::GameContext;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use io::{GameIo, SharedBuffer};
