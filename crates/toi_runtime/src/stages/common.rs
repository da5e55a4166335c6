//! Pieces every stage shares: the command loop, the shared commands, and
//! yes/no questions.

use toi_data::stage;
use toi_flow::{FlowValue, Signal, call};
use toi_foundation::Result;
use toi_grammar::{CaptureKind, CaptureSet, CommandRegistry, Dispatch};

use crate::context::GameContext;
use crate::stages::help::Help;

/// What a stage's command handler looks like. `None` keeps the stage's loop
/// going; a signal leaves the current entry point.
pub type Handler<F> =
    fn(&mut F, &mut GameContext, &CaptureSet) -> Result<Option<Signal<GameContext>>>;

/// A stage driven by typed commands.
pub trait Stage: Sized {
    /// The stage's commands.
    fn registry(&self) -> &CommandRegistry<Handler<Self>>;

    /// The prompt for the next command.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the prompt message is absent.
    fn prompt(&self, ctx: &GameContext) -> Result<String>;
}

/// Reads and runs commands until a handler returns a signal.
///
/// # Errors
///
/// Returns any error from reading input or from a handler.
pub fn run_commands<F: Stage>(flow: &mut F, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
    loop {
        let prompt = flow.prompt(ctx)?;
        let line = ctx.io.ask(&prompt)?;
        let Some((handler, captures)) = read_command(ctx, flow.registry(), &line)? else {
            continue;
        };
        if let Some(signal) = handler(flow, ctx, &captures)? {
            return Ok(signal);
        }
    }
}

/// Dispatches `line`, reporting empty, unrecognized and ambiguous input to
/// the player. Returns the handler and captures of the matching command.
///
/// # Errors
///
/// Returns `MissingString` if a common message is absent.
pub fn read_command<H: Clone>(
    ctx: &mut GameContext,
    registry: &CommandRegistry<H>,
    line: &str,
) -> Result<Option<(H, CaptureSet)>> {
    if line.trim().is_empty() {
        ctx.say(stage::COMMON, "empty cmd")?;
        return Ok(None);
    }
    match registry.dispatch(line) {
        Dispatch::Unrecognized => {
            ctx.say(stage::COMMON, "what")?;
            Ok(None)
        }
        Dispatch::Ambiguous(names) => {
            ctx.say(stage::COMMON, "ambiguous cmd")?;
            for name in &names {
                ctx.say_item(name)?;
            }
            Ok(None)
        }
        Dispatch::Matched {
            handler, captures, ..
        } => Ok(Some((handler, captures))),
    }
}

/// Registers the shared commands named in `commands` with their common
/// handlers.
///
/// # Errors
///
/// Returns the registration errors of [`CommandRegistry::register_from`].
pub fn register_common<F>(
    registry: &mut CommandRegistry<Handler<F>>,
    ctx: &GameContext,
    commands: &[(&str, Handler<F>)],
) -> Result<()> {
    for (name, handler) in commands {
        registry.register_from(&ctx.data.control, stage::COMMON, name, *handler)?;
    }
    Ok(())
}

/// `help [topic]`: runs the help flow, then returns to the caller.
///
/// # Errors
///
/// Returns errors from the help flow.
pub fn help<F>(
    _: &mut F,
    ctx: &mut GameContext,
    captures: &CaptureSet,
) -> Result<Option<Signal<GameContext>>> {
    let help = Box::new(Help::new(ctx)?);
    match captures.text(CaptureKind::Topic) {
        Some(topic) => call(help, "particular", Some(FlowValue::from(topic)), ctx)?,
        None => call(help, "general", None, ctx)?,
    };
    Ok(None)
}

/// `quit`: says farewell, naming the party if there is one, and ends.
///
/// # Errors
///
/// Returns `MissingString` if the farewell message is absent.
pub fn quit<F>(
    _: &mut F,
    ctx: &mut GameContext,
    _: &CaptureSet,
) -> Result<Option<Signal<GameContext>>> {
    match ctx.party_name().filter(|name| !name.is_empty()) {
        Some(name) => ctx.say_with(
            stage::COMMON,
            "farewell with party name",
            &[("party_name", &name)],
        )?,
        None => ctx.say(stage::COMMON, "farewell")?,
    }
    Ok(Some(Signal::end()))
}

/// An answer to a yes/no/abort question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    /// Yes.
    Yes,
    /// No.
    No,
    /// Neither; back out.
    Abort,
}

/// Asks until the player answers yes or no.
///
/// # Errors
///
/// Returns input errors, or registration errors if the common yes/no
/// grammars are missing or malformed.
pub fn ask_yes_no(ctx: &mut GameContext, prompt: &str) -> Result<bool> {
    let answer = insist(ctx, prompt, &["yes", "no"], "just yes or no")?;
    Ok(answer == Answer::Yes)
}

/// Asks until the player answers yes, no, or abort.
///
/// # Errors
///
/// Returns input errors, or registration errors if the common grammars are
/// missing or malformed.
pub fn ask_yes_no_abort(ctx: &mut GameContext, prompt: &str) -> Result<Answer> {
    insist(ctx, prompt, &["yes", "no", "abort"], "just yes no abort")
}

fn insist(ctx: &mut GameContext, prompt: &str, allowed: &[&str], nag: &str) -> Result<Answer> {
    let mut registry = CommandRegistry::new(stage::COMMON, ctx.captures());
    for name in allowed {
        let answer = match *name {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Abort,
        };
        registry.register_from(&ctx.data.control, stage::COMMON, name, answer)?;
    }
    loop {
        let line = ctx.io.ask(prompt)?;
        match registry.dispatch(&line) {
            Dispatch::Matched { handler, .. } => return Ok(handler),
            Dispatch::Unrecognized | Dispatch::Ambiguous(_) => ctx.say(stage::COMMON, nag)?,
        }
    }
}
