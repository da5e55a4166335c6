//! The player's party.

use std::cell::RefCell;
use std::rc::Rc;

use crate::background::Background;
use crate::character::{CharacterId, PlayerCharacter};
use crate::species::Species;

/// A party roster shared between the flow that owns it, the sub-flows it
/// hands it to, and the capture resolvers that read it at match time.
pub type SharedParty = Rc<RefCell<Party>>;

/// A collection of characters and a holder for some party info.
#[derive(Clone, Debug, Default)]
pub struct Party {
    name: String,
    characters: Vec<PlayerCharacter>,
    next_id: u32,
}

impl Party {
    /// Creates an empty party.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characters: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates an empty party wrapped for sharing.
    #[must_use]
    pub fn shared(name: impl Into<String>) -> SharedParty {
        Rc::new(RefCell::new(Self::new(name)))
    }

    /// Returns the party name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the party.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Creates a character and adds it to the party.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        species: Species,
        background: Background,
    ) -> CharacterId {
        let id = CharacterId::new(self.next_id.max(1));
        self.next_id = id.raw() + 1;
        self.characters
            .push(PlayerCharacter::new(id, name, species, background));
        id
    }

    /// Removes a character, returning it if it was present.
    pub fn remove(&mut self, id: CharacterId) -> Option<PlayerCharacter> {
        let idx = self.characters.iter().position(|pc| pc.id() == id)?;
        Some(self.characters.remove(idx))
    }

    /// Looks up a character by id.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<&PlayerCharacter> {
        self.characters.iter().find(|pc| pc.id() == id)
    }

    /// Looks up a character by id for modification.
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut PlayerCharacter> {
        self.characters.iter_mut().find(|pc| pc.id() == id)
    }

    /// Finds the first character whose name or alias equals `normalized`.
    #[must_use]
    pub fn find(&self, normalized: &str) -> Option<&PlayerCharacter> {
        self.characters.iter().find(|pc| pc.answers_to(normalized))
    }

    /// Returns true if the party has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Iterates over characters in the order they joined.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerCharacter> {
        self.characters.iter()
    }
}
