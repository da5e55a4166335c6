//! Character backgrounds (classes).

use serde::Deserialize;

use crate::Named;
use crate::stats::Stats;

/// A playable background.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Background {
    /// Full name, e.g. "Mercenary".
    pub name: String,
    /// Short name, e.g. "Merc".
    #[serde(rename = "shortname")]
    pub short_name: String,
    /// Modifiers added on top of species base stats. Absent entries are zero.
    #[serde(rename = "modifiers", default)]
    pub stat_modifiers: Stats,
}

impl Background {
    /// Creates a background with the given names and modifiers.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        stat_modifiers: Stats,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            stat_modifiers,
        }
    }
}

impl Named for Background {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_name(&self) -> &str {
        &self.short_name
    }
}
