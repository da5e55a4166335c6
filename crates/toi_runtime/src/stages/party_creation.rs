//! Assembling a party.

use std::rc::Rc;

use toi_data::{CharacterId, Party, SharedParty, stage};
use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal, call};
use toi_foundation::{Result, pretty_name};
use toi_grammar::{CaptureKind, CaptureSet, CommandRegistry};
use tracing::info;

use crate::context::GameContext;
use crate::stages::char_creation::CharCreation;
use crate::stages::common::{self, Handler, Stage, ask_yes_no, register_common, run_commands};
use crate::stages::main_menu::MainMenu;

/// Builds the party, one character creation sub-flow at a time.
///
/// The roster is shared with the `{pc}` resolver, so commands naming a
/// character always see the current members.
pub struct PartyCreation {
    party: SharedParty,
    registry: CommandRegistry<Handler<Self>>,
}

impl PartyCreation {
    const ENTRIES: EntryTable<Self, GameContext> =
        &[("from main menu", EntryPoint::Nullary(Self::from_main_menu))];
    const ENTRY_POINTS: EntryPoints<Self, GameContext> =
        EntryPoints::new("party creation", Self::ENTRIES);

    /// Creates an empty party and builds the stage's commands over it.
    ///
    /// # Errors
    ///
    /// Returns registration errors for malformed or missing grammars.
    pub fn new(ctx: &GameContext) -> Result<Self> {
        let party = Party::shared("");
        let captures = ctx.captures().with_party(Rc::clone(&party));
        let mut registry = CommandRegistry::new(stage::PARTY_CREATION, captures);
        register_common(
            &mut registry,
            ctx,
            &[
                ("abort", Self::abort),
                ("help", common::help),
                ("quit", common::quit),
            ],
        )?;
        let commands: [(&str, Handler<Self>); 7] = [
            ("add", Self::add),
            ("edit", Self::edit),
            ("delete", Self::delete),
            ("rename character", Self::rename_character),
            ("rename party", Self::rename_party),
            ("list", Self::list),
            ("done", Self::done),
        ];
        for (name, handler) in commands {
            registry.register_from(&ctx.data.control, stage::PARTY_CREATION, name, handler)?;
        }
        Ok(Self { party, registry })
    }

    fn from_main_menu(&mut self, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
        ctx.say(stage::PARTY_CREATION, "greeting")?;
        let name = loop {
            let name = pretty_name(&ctx.ask(stage::PARTY_CREATION, "name prompt")?);
            if !name.is_empty() {
                break name;
            }
        };
        self.party.borrow_mut().rename(name.as_str());
        ctx.party = Some(Rc::clone(&self.party));
        ctx.say_with(stage::PARTY_CREATION, "name is", &[("party_name", &name)])?;
        run_commands(self, ctx)
    }

    fn member_name(&self, id: CharacterId) -> Option<String> {
        self.party.borrow().get(id).map(|pc| pc.name().to_string())
    }

    /// The character a `{pc}` capture named, telling the player when it
    /// named nobody.
    fn named_character(
        &self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<(CharacterId, String)>> {
        let found = captures
            .character()
            .and_then(|id| self.member_name(id).map(|name| (id, name)));
        if found.is_none() {
            ctx.say(stage::COMMON, "no such char")?;
        }
        Ok(found)
    }

    fn abort(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        ctx.say(stage::COMMON, "okay")?;
        ctx.party = None;
        let menu = MainMenu::new(ctx)?;
        Ok(Some(Signal::change_flow(menu, "from party creation", None)))
    }

    fn add(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let creation = CharCreation::new(ctx, Rc::clone(&self.party))?;
        let added = call(Box::new(creation), "new", None, ctx)?
            .and_then(|value| value.as_int())
            .and_then(|raw| u32::try_from(raw).ok())
            .and_then(|raw| self.member_name(CharacterId::new(raw)));
        match added {
            Some(name) => ctx.say_with(stage::PARTY_CREATION, "added", &[("name", &name)])?,
            None => ctx.say(stage::PARTY_CREATION, "add aborted")?,
        }
        Ok(None)
    }

    fn edit(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let Some((id, _)) = self.named_character(ctx, captures)? else {
            return Ok(None);
        };
        let creation = CharCreation::new(ctx, Rc::clone(&self.party))?;
        let arg = FlowValue::Int(i64::from(id.raw()));
        let saved = call(Box::new(creation), "edit", Some(arg), ctx)?;
        if let Some(name) = saved.and_then(|_| self.member_name(id)) {
            ctx.say_with(stage::PARTY_CREATION, "edited", &[("name", &name)])?;
        }
        Ok(None)
    }

    fn delete(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let Some((id, name)) = self.named_character(ctx, captures)? else {
            return Ok(None);
        };
        let question = ctx
            .data
            .strings
            .format(stage::PARTY_CREATION, "delete confirm", &[("name", &name)])?;
        if ask_yes_no(ctx, &question)? {
            self.party.borrow_mut().remove(id);
            info!(id = %id, name = %name, "character removed");
            ctx.say_with(stage::PARTY_CREATION, "deleted", &[("name", &name)])?;
        } else {
            ctx.say_with(stage::PARTY_CREATION, "kept", &[("name", &name)])?;
        }
        Ok(None)
    }

    fn rename_character(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let Some((id, old)) = self.named_character(ctx, captures)? else {
            return Ok(None);
        };
        let name = pretty_name(captures.text(CaptureKind::Name).unwrap_or_default());
        if let Some(pc) = self.party.borrow_mut().get_mut(id) {
            pc.set_name(name.as_str());
        }
        ctx.say_with(
            stage::PARTY_CREATION,
            "renamed char",
            &[("old", &old), ("name", &name)],
        )?;
        Ok(None)
    }

    fn rename_party(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let name = pretty_name(captures.text(CaptureKind::Name).unwrap_or_default());
        self.party.borrow_mut().rename(name.as_str());
        ctx.say_with(stage::PARTY_CREATION, "renamed party", &[("party_name", &name)])?;
        Ok(None)
    }

    fn list(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let party_name = self.party.borrow().name().to_string();
        ctx.say_with(stage::PARTY_CREATION, "name is", &[("party_name", &party_name)])?;
        if self.party.borrow().is_empty() {
            ctx.say(stage::PARTY_CREATION, "empty party")?;
            return Ok(None);
        }
        ctx.say(stage::PARTY_CREATION, "character list")?;
        let template = ctx.text(stage::PARTY_CREATION, "char line")?.to_string();
        let lines: Vec<String> = self
            .party
            .borrow()
            .iter()
            .map(|pc| pc.short_description(&template))
            .collect();
        for line in &lines {
            ctx.say_item(line)?;
        }
        Ok(None)
    }

    fn done(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        if self.party.borrow().is_empty() {
            ctx.say(stage::PARTY_CREATION, "cannot finish")?;
            return Ok(None);
        }
        let party_name = self.party.borrow().name().to_string();
        info!(party = %party_name, members = self.party.borrow().len(), "party complete");
        ctx.say_with(stage::PARTY_CREATION, "finished", &[("party_name", &party_name)])?;
        let menu = MainMenu::new(ctx)?;
        Ok(Some(Signal::change_flow(menu, "from party creation", None)))
    }
}

impl Stage for PartyCreation {
    fn registry(&self) -> &CommandRegistry<Handler<Self>> {
        &self.registry
    }

    fn prompt(&self, ctx: &GameContext) -> Result<String> {
        Ok(ctx.text(stage::PARTY_CREATION, "what next")?.to_string())
    }
}

impl Flow<GameContext> for PartyCreation {
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
