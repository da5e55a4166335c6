//! Capture kinds, resolvers, and capture sets.
//!
//! A capture slot consumes part of the input line, normalizes it, and asks a
//! [`CaptureResolver`] what it refers to. Resolvers never reject text: an
//! unknown species or character still fills the slot, with no value, so the
//! command is recognized and its handler can say what was wrong.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use im::Vector;
use toi_data::{Background, CharacterId, GameData, Named, SharedParty, Species};

use crate::template::TemplateError;

/// The closed set of capture slot kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaptureKind {
    /// Free text naming something new (`{name}`).
    Name,
    /// Free text naming a help topic (`{topic}`).
    Topic,
    /// A playable species (`{species}`).
    Species,
    /// A character background (`{bg}`).
    Background,
    /// A member of the current party (`{pc}`).
    Pc,
}

impl CaptureKind {
    /// Every capture kind.
    pub const ALL: [CaptureKind; 5] = [
        CaptureKind::Name,
        CaptureKind::Topic,
        CaptureKind::Species,
        CaptureKind::Background,
        CaptureKind::Pc,
    ];

    /// The placeholder text used in templates.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            CaptureKind::Name => "name",
            CaptureKind::Topic => "topic",
            CaptureKind::Species => "species",
            CaptureKind::Background => "bg",
            CaptureKind::Pc => "pc",
        }
    }

    /// Looks up a kind by placeholder text.
    #[must_use]
    pub fn from_placeholder(placeholder: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.placeholder() == placeholder)
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// A resolved capture value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Captured {
    /// Normalized free text.
    Text(String),
    /// A species from the data set.
    Species(Species),
    /// A background from the data set.
    Background(Background),
    /// A party member, by id.
    Character(CharacterId),
}

/// Turns normalized captured text into a domain value.
pub trait CaptureResolver {
    /// The kind of slot this resolver fills.
    fn kind(&self) -> CaptureKind;

    /// Resolves `normalized` text. `None` means the text was not recognized.
    fn resolve(&self, normalized: &str) -> Option<Captured>;
}

/// Resolver for free text: the text is the value.
#[derive(Clone, Copy, Debug)]
pub struct TextResolver(CaptureKind);

impl CaptureResolver for TextResolver {
    fn kind(&self) -> CaptureKind {
        self.0
    }

    fn resolve(&self, normalized: &str) -> Option<Captured> {
        Some(Captured::Text(normalized.to_string()))
    }
}

/// Resolver over the species list.
#[derive(Clone, Debug)]
pub struct SpeciesResolver(Vector<Species>);

impl CaptureResolver for SpeciesResolver {
    fn kind(&self) -> CaptureKind {
        CaptureKind::Species
    }

    fn resolve(&self, normalized: &str) -> Option<Captured> {
        find_named(&self.0, normalized).map(|s| Captured::Species(s.clone()))
    }
}

/// Resolver over the background list.
#[derive(Clone, Debug)]
pub struct BackgroundResolver(Vector<Background>);

impl CaptureResolver for BackgroundResolver {
    fn kind(&self) -> CaptureKind {
        CaptureKind::Background
    }

    fn resolve(&self, normalized: &str) -> Option<Captured> {
        find_named(&self.0, normalized).map(|b| Captured::Background(b.clone()))
    }
}

/// Resolver over the live party roster.
///
/// The roster is read on every call, so characters added or removed after
/// the matcher was built are seen immediately.
#[derive(Clone, Debug)]
pub struct PartyResolver(SharedParty);

impl CaptureResolver for PartyResolver {
    fn kind(&self) -> CaptureKind {
        CaptureKind::Pc
    }

    fn resolve(&self, normalized: &str) -> Option<Captured> {
        let party = self.0.try_borrow().ok()?;
        party
            .find(normalized)
            .map(|pc| Captured::Character(pc.id()))
    }
}

/// First item whose full or short name matches.
fn find_named<'a, T: Named + Clone>(items: &'a Vector<T>, normalized: &str) -> Option<&'a T> {
    items.iter().find(|item| item.answers_to(normalized))
}

/// The collections capture slots resolve against.
///
/// Lists are `im::Vector`s, so handing a copy to each resolver is cheap. The
/// party is shared, not copied.
#[derive(Clone, Debug, Default)]
pub struct CaptureContext {
    species: Vector<Species>,
    backgrounds: Vector<Background>,
    party: Option<SharedParty>,
}

impl CaptureContext {
    /// Creates a context over the given lists, with no party.
    #[must_use]
    pub fn new(species: Vector<Species>, backgrounds: Vector<Background>) -> Self {
        Self {
            species,
            backgrounds,
            party: None,
        }
    }

    /// Creates a context over the lists of a loaded data set.
    #[must_use]
    pub fn from_data(data: &GameData) -> Self {
        Self::new(data.species.clone(), data.backgrounds.clone())
    }

    /// Makes `{pc}` captures available, resolving against `party`.
    #[must_use]
    pub fn with_party(mut self, party: SharedParty) -> Self {
        self.party = Some(party);
        self
    }

    /// Builds the resolver for one capture kind.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnavailableCapture`] for `{pc}` when no party
    /// was supplied.
    pub fn resolver(&self, kind: CaptureKind) -> Result<Rc<dyn CaptureResolver>, TemplateError> {
        Ok(match kind {
            CaptureKind::Name | CaptureKind::Topic => Rc::new(TextResolver(kind)),
            CaptureKind::Species => Rc::new(SpeciesResolver(self.species.clone())),
            CaptureKind::Background => Rc::new(BackgroundResolver(self.backgrounds.clone())),
            CaptureKind::Pc => match &self.party {
                Some(party) => Rc::new(PartyResolver(Rc::clone(party))),
                None => return Err(TemplateError::UnavailableCapture { kind }),
            },
        })
    }
}

/// The captures of one successful match.
///
/// A kind is *present* when the matched template had a slot for it; a present
/// kind is *unresolved* when its text named nothing known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureSet {
    values: HashMap<CaptureKind, Option<Captured>>,
}

impl CaptureSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a capture, replacing any earlier value for the kind.
    pub fn insert(&mut self, kind: CaptureKind, value: Option<Captured>) {
        self.values.insert(kind, value);
    }

    /// Returns true if the matched template had a slot of this kind.
    #[must_use]
    pub fn contains(&self, kind: CaptureKind) -> bool {
        self.values.contains_key(&kind)
    }

    /// Returns true if the slot is present but its text named nothing.
    #[must_use]
    pub fn is_unresolved(&self, kind: CaptureKind) -> bool {
        matches!(self.values.get(&kind), Some(None))
    }

    /// Returns the resolved value, if the slot is present and resolved.
    #[must_use]
    pub fn get(&self, kind: CaptureKind) -> Option<&Captured> {
        self.values.get(&kind).and_then(Option::as_ref)
    }

    /// Returns captured free text.
    #[must_use]
    pub fn text(&self, kind: CaptureKind) -> Option<&str> {
        match self.get(kind) {
            Some(Captured::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the captured species.
    #[must_use]
    pub fn species(&self) -> Option<&Species> {
        match self.get(CaptureKind::Species) {
            Some(Captured::Species(species)) => Some(species),
            _ => None,
        }
    }

    /// Returns the captured background.
    #[must_use]
    pub fn background(&self) -> Option<&Background> {
        match self.get(CaptureKind::Background) {
            Some(Captured::Background(bg)) => Some(bg),
            _ => None,
        }
    }

    /// Returns the captured party member.
    #[must_use]
    pub fn character(&self) -> Option<CharacterId> {
        match self.get(CaptureKind::Pc) {
            Some(Captured::Character(id)) => Some(*id),
            _ => None,
        }
    }

    /// Returns the number of present captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no captures are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
