//! Running flows.
//!
//! [`call`] is a trampoline: it enters a flow and keeps acting on the signals
//! that come back until the flow ends. A flow that wants a sub-flow calls
//! [`call`] itself from inside an entry point, so its own locals stay live on
//! the Rust stack until the sub-flow finishes.

use toi_foundation::{Error, ErrorKind, Result};
use tracing::{debug, info, trace};

use crate::flow::Flow;
use crate::signal::{FlowValue, Signal};

/// Runs `flow` from `entry_point` until it ends, returning its value.
///
/// `ChangeFlow` replaces the running flow without returning, so the value
/// comes from whichever flow finally signals `EndFlow`.
///
/// # Errors
///
/// Returns the first error an entry point returns, with the flow and entry
/// point recorded as a frame in its context.
pub fn call<C>(
    flow: Box<dyn Flow<C>>,
    entry_point: &str,
    arg: Option<FlowValue>,
    ctx: &mut C,
) -> Result<Option<FlowValue>> {
    let mut flow = flow;
    let mut entry_point = entry_point.to_string();
    let mut arg = arg;

    debug!(flow = flow.name(), entry_point = %entry_point, "entering flow");
    loop {
        let signal = flow
            .enter(ctx, &entry_point, arg.clone())
            .map_err(|err| with_frame(err, flow.name(), &entry_point))?;

        match signal {
            Signal::Continue => {
                trace!(flow = flow.name(), entry_point = %entry_point, "continuing");
            }
            Signal::ChangeFlow {
                flow: next,
                entry_point: next_entry,
                arg: next_arg,
            } => {
                info!(
                    from = flow.name(),
                    to = next.name(),
                    entry_point = %next_entry,
                    "flow changed"
                );
                flow = next;
                entry_point = next_entry;
                arg = next_arg;
            }
            Signal::EndFlow(value) => {
                debug!(flow = flow.name(), value = ?value, "flow ended");
                return Ok(value);
            }
        }
    }
}

fn with_frame(mut err: Error, flow: &str, entry_point: &str) -> Error {
    let context = err
        .context
        .take()
        .unwrap_or_default()
        .with_frame(format!("{flow}/{entry_point}"));
    err.with_context(context)
}

/// Owns the shared context and runs the outermost flow.
#[derive(Debug)]
pub struct FlowController<C> {
    ctx: C,
}

impl<C> FlowController<C> {
    /// Creates a controller over `ctx`.
    #[must_use]
    pub fn new(ctx: C) -> Self {
        Self { ctx }
    }

    /// The shared context.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// The shared context, mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Consumes the controller, returning the context.
    pub fn into_context(self) -> C {
        self.ctx
    }

    /// Runs `flow` from `entry_point` until the application ends.
    ///
    /// # Errors
    ///
    /// Returns any error a flow returns, and `SignalMisrouted` if the
    /// outermost flow ends with a value, since nothing is left to receive it.
    pub fn run(&mut self, flow: impl Flow<C> + 'static, entry_point: &str) -> Result<()> {
        let name = flow.name();
        info!(flow = name, entry_point, "starting");
        match call(Box::new(flow), entry_point, None, &mut self.ctx)? {
            None => {
                info!("finished");
                Ok(())
            }
            Some(value) => Err(Error::new(ErrorKind::SignalMisrouted(format!(
                "outermost flow (started as {name}) ended with {value} and no caller to receive it"
            )))),
        }
    }
}
