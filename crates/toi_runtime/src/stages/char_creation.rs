//! Creating and editing one character.
//!
//! Runs as a sub-flow of party creation. Nothing touches the party until
//! `done`, which adds or updates the character and ends the flow with its
//! id; `abort` ends with no value.

use toi_data::{Background, CharacterId, SharedParty, Species, stage};
use toi_flow::{EntryPoint, EntryPoints, EntryTable, Flow, FlowValue, Signal};
use toi_foundation::{Error, Result, pretty_name};
use toi_grammar::{CaptureKind, CaptureSet, CommandRegistry};
use tracing::debug;

use crate::context::GameContext;
use crate::stages::common::{self, Handler, Stage, register_common, run_commands};

/// The character being built.
pub struct CharCreation {
    party: SharedParty,
    editing: Option<CharacterId>,
    name: String,
    species: Option<Species>,
    background: Option<Background>,
    registry: CommandRegistry<Handler<Self>>,
}

impl CharCreation {
    const ENTRIES: EntryTable<Self, GameContext> = &[
        ("new", EntryPoint::Nullary(Self::new_character)),
        ("edit", EntryPoint::Unary(Self::edit)),
    ];
    const ENTRY_POINTS: EntryPoints<Self, GameContext> =
        EntryPoints::new("character creation", Self::ENTRIES);

    /// Builds the stage's commands. Finished characters go into `party`.
    ///
    /// # Errors
    ///
    /// Returns registration errors for malformed or missing grammars.
    pub fn new(ctx: &GameContext, party: SharedParty) -> Result<Self> {
        let mut registry = CommandRegistry::new(stage::CHAR_CREATION, ctx.captures());
        register_common(
            &mut registry,
            ctx,
            &[("help", common::help), ("abort", Self::abort)],
        )?;
        let commands: [(&str, Handler<Self>); 7] = [
            ("done", Self::done),
            ("overview", Self::overview),
            ("list species", Self::list_species),
            ("list bgs", Self::list_backgrounds),
            ("set species", Self::set_species),
            ("set bg", Self::set_background),
            ("rename", Self::rename),
        ];
        for (name, handler) in commands {
            registry.register_from(&ctx.data.control, stage::CHAR_CREATION, name, handler)?;
        }
        Ok(Self {
            party,
            editing: None,
            name: String::new(),
            species: None,
            background: None,
            registry,
        })
    }

    fn new_character(&mut self, ctx: &mut GameContext) -> Result<Signal<GameContext>> {
        ctx.say(stage::CHAR_CREATION, "greeting")?;
        self.name = loop {
            let name = pretty_name(&ctx.ask(stage::CHAR_CREATION, "name prompt")?);
            if !name.is_empty() {
                break name;
            }
        };
        run_commands(self, ctx)
    }

    fn edit(&mut self, ctx: &mut GameContext, id: FlowValue) -> Result<Signal<GameContext>> {
        let raw = id
            .as_int()
            .ok_or_else(|| Error::internal(format!("character id must be an integer, got {id}")))?;
        let found = u32::try_from(raw)
            .ok()
            .map(CharacterId::new)
            .and_then(|id| self.party.borrow().get(id).cloned());
        let Some(pc) = found else {
            ctx.say(stage::COMMON, "no such char")?;
            return Ok(Signal::end());
        };
        self.editing = Some(pc.id());
        self.name = pc.name().to_string();
        self.species = Some(pc.species().clone());
        self.background = Some(pc.background().clone());
        ctx.say_with(stage::CHAR_CREATION, "edit greeting", &[("name", &self.name)])?;
        run_commands(self, ctx)
    }

    fn overview(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let unset = ctx.text(stage::CHAR_CREATION, "not selected")?.to_string();
        let species = self.species.as_ref().map_or(unset.as_str(), |s| s.name.as_str());
        let background = self.background.as_ref().map_or(unset.as_str(), |b| b.name.as_str());
        let lines = [
            ("name", "name", self.name.as_str()),
            ("species", "species", species),
            ("bg", "bg", background),
        ];
        let lines = lines
            .into_iter()
            .map(|(key, placeholder, value)| {
                ctx.data
                    .strings
                    .format(stage::CHAR_CREATION, key, &[(placeholder, value)])
            })
            .collect::<Result<Vec<_>>>()?;
        ctx.io.say_all(lines.iter().map(String::as_str));
        if let (Some(species), Some(background)) = (&self.species, &self.background) {
            let stats = species.base_stats.apply(&background.stat_modifiers).to_string();
            ctx.say_with(stage::CHAR_CREATION, "stats", &[("stats", &stats)])?;
        }
        Ok(None)
    }

    fn list_species(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        ctx.say(stage::CHAR_CREATION, "species list")?;
        let options: Vec<(String, String)> = ctx
            .data
            .species
            .iter()
            .map(|s| (s.name.clone(), s.short_name.clone()))
            .collect();
        say_options(ctx, &options)?;
        Ok(None)
    }

    fn list_backgrounds(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        ctx.say(stage::CHAR_CREATION, "bg list")?;
        let options: Vec<(String, String)> = ctx
            .data
            .backgrounds
            .iter()
            .map(|b| (b.name.clone(), b.short_name.clone()))
            .collect();
        say_options(ctx, &options)?;
        Ok(None)
    }

    fn set_species(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        match captures.species() {
            Some(species) => {
                ctx.say_with(
                    stage::CHAR_CREATION,
                    "species set",
                    &[("species", &species.name)],
                )?;
                self.species = Some(species.clone());
            }
            None => ctx.say(stage::CHAR_CREATION, "invalid species")?,
        }
        Ok(None)
    }

    fn set_background(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        match captures.background() {
            Some(background) => {
                ctx.say_with(stage::CHAR_CREATION, "bg set", &[("bg", &background.name)])?;
                self.background = Some(background.clone());
            }
            None => ctx.say(stage::CHAR_CREATION, "invalid bg")?,
        }
        Ok(None)
    }

    fn rename(
        &mut self,
        ctx: &mut GameContext,
        captures: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let name = pretty_name(captures.text(CaptureKind::Name).unwrap_or_default());
        if !name.is_empty() {
            self.name = name;
            ctx.say_with(stage::CHAR_CREATION, "renamed", &[("name", &self.name)])?;
        }
        Ok(None)
    }

    fn done(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        let Some(species) = self.species.clone() else {
            ctx.say(stage::CHAR_CREATION, "species not selected")?;
            return Ok(None);
        };
        let Some(background) = self.background.clone() else {
            ctx.say(stage::CHAR_CREATION, "bg not selected")?;
            return Ok(None);
        };

        let mut party = self.party.borrow_mut();
        let existing = self.editing.and_then(|id| party.get_mut(id));
        let id = match existing {
            Some(pc) => {
                pc.set_name(self.name.as_str());
                pc.change_species(species);
                pc.change_background(background);
                pc.id()
            }
            None => party.add(self.name.as_str(), species, background),
        };
        debug!(id = %id, name = %self.name, "character saved");
        Ok(Some(Signal::end_with(i64::from(id.raw()))))
    }

    fn abort(
        &mut self,
        ctx: &mut GameContext,
        _: &CaptureSet,
    ) -> Result<Option<Signal<GameContext>>> {
        ctx.say(stage::COMMON, "okay")?;
        Ok(Some(Signal::end()))
    }
}

fn say_options(ctx: &mut GameContext, options: &[(String, String)]) -> Result<()> {
    for (name, short) in options {
        let line = ctx.data.strings.format(
            stage::CHAR_CREATION,
            "option line",
            &[("name", name), ("short", short)],
        )?;
        ctx.say_item(&line)?;
    }
    Ok(())
}

impl Stage for CharCreation {
    fn registry(&self) -> &CommandRegistry<Handler<Self>> {
        &self.registry
    }

    fn prompt(&self, ctx: &GameContext) -> Result<String> {
        Ok(ctx.text(stage::CHAR_CREATION, "prompt")?.to_string())
    }
}

impl Flow<GameContext> for CharCreation {
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
