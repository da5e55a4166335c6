//! The main menu.

use toi_data::stage;
use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal};
use toi_foundation::Result;
use toi_grammar::{CaptureSet, CommandRegistry};

use crate::context::GameContext;
use crate::stages::common::{self, Handler, Stage, register_common, run_commands};
use crate::stages::party_creation::PartyCreation;

/// Where a game begins and where a finished party returns to.
pub struct MainMenu {
    registry: CommandRegistry<Handler<Self>>,
}

impl MainMenu {
    const ENTRIES: EntryTable<Self, GameContext> = &[
        ("start", EntryPoint::Nullary(Self::start)),
        ("from party creation", EntryPoint::Nullary(Self::from_party_creation)),
    ];
    const ENTRY_POINTS: EntryPoints<Self, GameContext> =
        EntryPoints::new("main menu", Self::ENTRIES);

    /// Builds the main menu's commands.
    ///
    /// # Errors
    ///
    /// Returns registration errors for malformed or missing grammars.
    pub fn new(ctx: &GameContext) -> Result<Self> {
        let mut registry = CommandRegistry::new(stage::MAIN_MENU, ctx.captures());
        register_common(
            &mut registry,
            ctx,
            &[("help", common::help), ("quit", common::quit)],
        )?;
        registry.register_from(
            &ctx.data.control,
            stage::MAIN_MENU,
            "new party",
            Self::new_party,
        )?;
        Ok(Self { registry })
    }

    fn start(&mut self, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
        ctx.say(stage::MAIN_MENU, "greeting")?;
        run_commands(self, ctx)
    }

    fn from_party_creation(&mut self, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
        if let Some(name) = ctx.party_name() {
            ctx.say_with(stage::MAIN_MENU, "party ready", &[("party_name", &name)])?;
        }
        run_commands(self, ctx)
    }

    fn new_party(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let next = PartyCreation::new(ctx)?;
        Ok(Some(Signal::change_flow(next, "from main menu", None)))
    }
}

impl Stage for MainMenu {
    fn registry(&self) -> &CommandRegistry<Handler<Self>> {
        &self.registry
    }

    fn prompt(&self, ctx: &GameContext) -> Result<String> {
        Ok(ctx.text(stage::MAIN_MENU, "prompt")?.to_string())
    }
}

impl Flow<GameContext> for MainMenu {
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
