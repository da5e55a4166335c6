//! Stage flows for Toi.
//!
//! A flow is a named bundle of entry points sharing state. Entry points do
//! not return to whoever started them; they return a [`Signal`] saying what
//! should run next:
//!
//! - [`Signal::Continue`] - run the same entry point again
//! - [`Signal::ChangeFlow`] - replace the running flow with another one
//! - [`Signal::EndFlow`] - finish, handing an optional value to the caller
//!
//! [`call`] runs a flow until it ends and is how a flow starts a sub-flow and
//! resumes afterwards. [`FlowController`] runs the outermost flow.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod controller;
pub mod flow;
pub mod signal;

pub use controller::{FlowController, call};
pub use flow::{EntryPoint, EntryPoints, EntryTable, Flow};
pub use signal::{FlowValue, Signal};
