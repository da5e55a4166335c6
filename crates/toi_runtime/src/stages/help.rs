//! The help browser.

use toi_data::stage;
use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal};
use toi_foundation::{Error, Result};
use toi_grammar::{CaptureKind, CaptureSet, CommandRegistry};

use crate::context::GameContext;
use crate::stages::common::{Handler, Stage, run_commands};

/// Shows help topics, either one at a time or interactively.
pub struct Help {
    registry: CommandRegistry<Handler<Self>>,
}

impl Help {
    const ENTRIES: EntryTable<Self, GameContext> = &[
        ("general", EntryPoint::Nullary(Self::general)),
        ("particular", EntryPoint::Unary(Self::particular)),
    ];
    const ENTRY_POINTS: EntryPoints<Self, GameContext> =
        EntryPoints::new("help", Self::ENTRIES);

    /// Builds the help stage's commands.
    ///
    /// # Errors
    ///
    /// Returns registration errors for malformed or missing grammars.
    pub fn new(ctx: &GameContext) -> Result<Self> {
        let mut registry = CommandRegistry::new(stage::HELP, ctx.captures());
        let commands: [(&str, Handler<Self>); 3] = [
            ("read", Self::read),
            ("topics", Self::topics),
            ("back", Self::back),
        ];
        for (name, handler) in commands {
            registry.register_from(&ctx.data.control, stage::HELP, name, handler)?;
        }
        Ok(Self { registry })
    }

    fn general(&mut self, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
        let index = ctx.data.help.index.clone();
        ctx.io.say(&index);
        ctx.say(stage::HELP, "general")?;
        run_commands(self, ctx)
    }

    fn particular(
        &mut self,
        ctx: &mut GameContext,
        topic: FlowValue,
    ) -> Result<Signal<GameContext>> {
        let topic = topic
            .as_text()
            .ok_or_else(|| Error::internal(format!("help topic must be text, got {topic}")))?;
        show_topic(ctx, topic)?;
        Ok(Signal::end())
    }

    fn read(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        if let Some(topic) = captures.text(CaptureKind::Topic) {
            show_topic(ctx, topic)?;
        }
        Ok(None)
    }

    fn topics(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        ctx.say(stage::HELP, "topics")?;
        let names: Vec<String> = ctx.data.help.topic_names().map(str::to_string).collect();
        for name in &names {
            ctx.say_item(name)?;
        }
        Ok(None)
    }

    fn back(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        ctx.say(stage::HELP, "leaving")?;
        Ok(Some(Signal::end()))
    }
}

fn show_topic(ctx: &mut GameContext, topic: &str) -> Result<()> {
    match ctx.data.help.topic(topic) {
        Some(text) => {
            let text = text.to_string();
            ctx.io.say(&text);
            Ok(())
        }
        None => ctx.say_with(stage::HELP, "no topic", &[("topic", topic)]),
    }
}

impl Stage for Help {
    fn registry(&self) -> &CommandRegistry<Handler<Self>> {
        &self.registry
    }

    fn prompt(&self, ctx: &GameContext) -> Result<String> {
        Ok(ctx.text(stage::HELP, "prompt")?.to_string())
    }
}

impl Flow<GameContext> for Help {
    fn name(&self) -> &'static str {
        Self::ENTRY_POINTS.flow()
    }

    fn enter(
        &mut self,
        ctx: &mut GameContext,
        entry_point: &str,
        arg: Option<FlowValue>,
    ) -> Result<Signal<GameContext>> {
        Self::ENTRY_POINTS.invoke(self, ctx, entry_point, arg)
    }
}
