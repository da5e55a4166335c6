//! The first flow: checks the data, then hands over to the main menu.

use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal};
use toi_foundation::Result;
use tracing::info;

use crate::context::GameContext;
use crate::stages::main_menu::MainMenu;

/// Startup checks.
#[derive(Debug, Default)]
pub struct Startup;

impl Startup {
    const ENTRIES: EntryTable<Self, GameContext> = &[("start", EntryPoint::Nullary(Self::start))];
    const ENTRY_POINTS: EntryPoints<Self, GameContext> =
        EntryPoints::new("startup", Self::ENTRIES);

    fn start(&mut self, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
        ctx.data.ensure_playable()?;
        info!(
            species = ctx.data.species.len(),
            backgrounds = ctx.data.backgrounds.len(),
            "data is playable"
        );
        let menu = MainMenu::new(ctx)?;
        Ok(Signal::change_flow(menu, "start", None))
    }
}

impl Flow<GameContext> for Startup {
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
