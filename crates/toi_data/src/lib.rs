//! Game data for Toi.
//!
//! This crate holds everything the interaction core reads or mutates but does
//! not own the lifecycle of:
//! - [`Species`] and [`Background`] - playable options, read-only after load
//! - [`PlayerCharacter`] and [`Party`] - the roster built during play
//! - [`ControlCatalog`], [`StringCatalog`], [`HelpCatalog`] - grammar
//!   templates, messages, and help text
//! - [`GameData`] - the bundle of all of the above, loaded from YAML

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod background;
pub mod catalog;
pub mod character;
pub mod gamedata;
pub mod loader;
pub mod party;
pub mod species;
pub mod stage;
pub mod stats;

pub use background::Background;
pub use catalog::{ControlCatalog, HelpCatalog, StringCatalog};
pub use character::{CharacterId, PlayerCharacter};
pub use gamedata::GameData;
pub use party::{Party, SharedParty};
pub use species::Species;
pub use stats::{Stat, Stats};

/// Something the player can pick by its full or short name.
pub trait Named {
    /// Full display name.
    fn name(&self) -> &str;

    /// Abbreviated name.
    fn short_name(&self) -> &str;

    /// Returns true if `normalized` names this item.
    ///
    /// `normalized` must already be in [`toi_foundation::normalize`] form.
    fn answers_to(&self, normalized: &str) -> bool {
        toi_foundation::normalize(self.name()) == normalized
            || toi_foundation::normalize(self.short_name()) == normalized
    }
}
