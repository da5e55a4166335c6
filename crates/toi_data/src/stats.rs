//! Player character statistics.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// A player character statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Strength
    Str,
    /// Dexterity
    Dex,
    /// Intelligence
    Int,
    /// Spirit
    Spi,
    /// Charisma
    Cha,
    /// Luck
    Luc,
}

impl Stat {
    /// All statistics in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Str,
        Stat::Dex,
        Stat::Int,
        Stat::Spi,
        Stat::Cha,
        Stat::Luc,
    ];

    const fn index(self) -> usize {
        match self {
            Stat::Str => 0,
            Stat::Dex => 1,
            Stat::Int => 2,
            Stat::Spi => 3,
            Stat::Cha => 4,
            Stat::Luc => 5,
        }
    }

    /// Three-letter label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Str => "str",
            Stat::Dex => "dex",
            Stat::Int => "int",
            Stat::Spi => "spi",
            Stat::Cha => "cha",
            Stat::Luc => "luc",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A full table of statistic values. Missing entries are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<Stat, i32>")]
pub struct Stats([i32; 6]);

impl Stats {
    /// Creates a table with every statistic at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; 6])
    }

    /// Returns the value of one statistic.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> i32 {
        self.0[stat.index()]
    }

    /// Sets one statistic.
    pub fn set(&mut self, stat: Stat, value: i32) {
        self.0[stat.index()] = value;
    }

    /// Returns a copy with one statistic replaced.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    /// Returns these stats with `modifiers` added to each entry.
    #[must_use]
    pub fn apply(&self, modifiers: &Stats) -> Self {
        let mut out = *self;
        for stat in Stat::ALL {
            out.set(stat, self.get(stat) + modifiers.get(stat));
        }
        out
    }

    /// Iterates over `(stat, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl From<HashMap<Stat, i32>> for Stats {
    fn from(map: HashMap<Stat, i32>) -> Self {
        let mut stats = Stats::new();
        for (stat, value) in map {
            stats.set(stat, value);
        }
        stats
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (stat, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{stat} {value}")?;
            first = false;
        }
        Ok(())
    }
}
