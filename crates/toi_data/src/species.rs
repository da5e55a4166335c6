//! Playable species.

use serde::Deserialize;

use crate::Named;
use crate::stats::Stats;

/// A playable species.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Species {
    /// Full name, e.g. "Wood Elf".
    pub name: String,
    /// Short name, e.g. "Elf".
    #[serde(rename = "shortname")]
    pub short_name: String,
    /// Statistics every member of the species starts with.
    #[serde(rename = "stats")]
    pub base_stats: Stats,
}

impl Species {
    /// Creates a species with the given names and base stats.
    #[must_use]
    pub fn new(name: impl Into<String>, short_name: impl Into<String>, base_stats: Stats) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            base_stats,
        }
    }
}

impl Named for Species {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_name(&self) -> &str {
        &self.short_name
    }
}
