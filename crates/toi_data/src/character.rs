//! Player characters.

use std::fmt;

use toi_foundation::{interpolate, normalize};

use crate::background::Background;
use crate::species::Species;
use crate::stats::Stats;

/// Stable identifier of a character within its party.
///
/// Ids are never reused, so a stale id simply fails to resolve after the
/// character is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(u32);

impl CharacterId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Information about a player character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerCharacter {
    id: CharacterId,
    name: String,
    aliases: Vec<String>,
    species: Species,
    background: Background,
    stats: Stats,
}

impl PlayerCharacter {
    /// Creates a character. Stats are derived from species and background,
    /// and the normalized first word of the name becomes the default alias.
    #[must_use]
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        species: Species,
        background: Background,
    ) -> Self {
        let mut pc = Self {
            id,
            name: String::new(),
            aliases: Vec::new(),
            stats: Stats::new(),
            species,
            background,
        };
        pc.recompute_stats();
        pc.set_name(name);
        pc
    }

    /// Returns the character id.
    #[must_use]
    pub const fn id(&self) -> CharacterId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registered aliases, normalized.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the species.
    #[must_use]
    pub const fn species(&self) -> &Species {
        &self.species
    }

    /// Returns the background.
    #[must_use]
    pub const fn background(&self) -> &Background {
        &self.background
    }

    /// Returns the current statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Changes the species and recalculates stats.
    pub fn change_species(&mut self, species: Species) {
        self.species = species;
        self.recompute_stats();
    }

    /// Changes the background and recalculates stats.
    pub fn change_background(&mut self, background: Background) {
        self.background = background;
        self.recompute_stats();
    }

    /// Sets the name, replacing the default alias derived from the old name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if let Some(old) = default_alias(&self.name) {
            self.remove_alias(&old);
        }
        self.name = name;
        if let Some(alias) = default_alias(&self.name) {
            self.add_alias(&alias);
        }
    }

    /// Adds an alias. Duplicates are ignored.
    pub fn add_alias(&mut self, alias: &str) {
        let alias = normalize(alias);
        if !alias.is_empty() && !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
    }

    /// Removes an alias.
    pub fn remove_alias(&mut self, alias: &str) {
        let alias = normalize(alias);
        self.aliases.retain(|a| *a != alias);
    }

    /// Resets the alias list to just the default alias.
    pub fn reset_aliases(&mut self) {
        self.aliases.clear();
        if let Some(alias) = default_alias(&self.name) {
            self.aliases.push(alias);
        }
    }

    /// Returns true if `normalized` is this character's name or an alias.
    #[must_use]
    pub fn answers_to(&self, normalized: &str) -> bool {
        normalize(&self.name) == normalized || self.aliases.iter().any(|a| a == normalized)
    }

    /// Renders a one-line description from a message template.
    ///
    /// Supported placeholders: `{name}`, `{species}`, `{bg}` (short names).
    #[must_use]
    pub fn short_description(&self, template: &str) -> String {
        interpolate(
            template,
            &[
                ("name", self.name.as_str()),
                ("species", self.species.short_name.as_str()),
                ("bg", self.background.short_name.as_str()),
            ],
        )
    }

    fn recompute_stats(&mut self) {
        self.stats = self.species.base_stats.apply(&self.background.stat_modifiers);
    }
}

fn default_alias(name: &str) -> Option<String> {
    name.split_whitespace().next().map(normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    fn dwarf() -> Species {
        Species::new("Dwarf", "Dwa", Stats::new().with(Stat::Str, 12))
    }

    fn merc() -> Background {
        Background::new("Mercenary", "Merc", Stats::new().with(Stat::Str, 2))
    }

    #[test]
    fn stats_combine_species_and_background() {
        let pc = PlayerCharacter::new(CharacterId::new(1), "Gimli", dwarf(), merc());
        assert_eq!(pc.stats().get(Stat::Str), 14);
    }

    #[test]
    fn default_alias_is_first_word() {
        let pc = PlayerCharacter::new(CharacterId::new(1), "Bilbo Baggins", dwarf(), merc());
        assert_eq!(pc.aliases(), ["bilbo".to_string()]);
        assert!(pc.answers_to("bilbo baggins"));
        assert!(pc.answers_to("bilbo"));
        assert!(!pc.answers_to("baggins"));
    }

    #[test]
    fn rename_swaps_default_alias_and_keeps_custom_ones() {
        let mut pc = PlayerCharacter::new(CharacterId::new(1), "Bilbo Baggins", dwarf(), merc());
        pc.add_alias("Burglar");
        pc.set_name("Frodo Baggins");
        assert!(pc.answers_to("frodo"));
        assert!(pc.answers_to("burglar"));
        assert!(!pc.answers_to("bilbo"));
    }

    #[test]
    fn reset_aliases_drops_custom_ones() {
        let mut pc = PlayerCharacter::new(CharacterId::new(1), "Sam", dwarf(), merc());
        pc.add_alias("gardener");
        pc.reset_aliases();
        assert_eq!(pc.aliases(), ["sam".to_string()]);
    }

    #[test]
    fn change_background_recomputes_stats() {
        let mut pc = PlayerCharacter::new(CharacterId::new(1), "Gimli", dwarf(), merc());
        pc.change_background(Background::new("Scholar", "Sch", Stats::new()));
        assert_eq!(pc.stats().get(Stat::Str), 12);
    }

    #[test]
    fn short_description_uses_short_names() {
        let pc = PlayerCharacter::new(CharacterId::new(3), "Gimli", dwarf(), merc());
        assert_eq!(pc.short_description("{name}, {species} {bg}"), "Gimli, Dwa Merc");
    }
}
