//! The game data bundle.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use im::Vector;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use toi_foundation::{Error, Result};
use tracing::info;

use crate::background::Background;
use crate::catalog::{ControlCatalog, HelpCatalog, StageControl, StringCatalog};
use crate::loader;
use crate::species::Species;
use crate::stage::{CONTROL_FILES, STRING_FILES};

/// Data files compiled into the binary, keyed by path relative to the data
/// directory.
const BUILTIN: &[(&str, &str)] = &[
    ("control/common.yaml", include_str!("../data/control/common.yaml")),
    ("control/main_menu.yaml", include_str!("../data/control/main_menu.yaml")),
    (
        "control/party_creation.yaml",
        include_str!("../data/control/party_creation.yaml"),
    ),
    (
        "control/char_creation.yaml",
        include_str!("../data/control/char_creation.yaml"),
    ),
    ("control/help.yaml", include_str!("../data/control/help.yaml")),
    ("strings/common.yaml", include_str!("../data/strings/common.yaml")),
    ("strings/main_menu.yaml", include_str!("../data/strings/main_menu.yaml")),
    (
        "strings/party_creation.yaml",
        include_str!("../data/strings/party_creation.yaml"),
    ),
    (
        "strings/char_creation.yaml",
        include_str!("../data/strings/char_creation.yaml"),
    ),
    ("strings/help.yaml", include_str!("../data/strings/help.yaml")),
    ("strings/io.yaml", include_str!("../data/strings/io.yaml")),
    ("help.yaml", include_str!("../data/help.yaml")),
    ("game/species.yaml", include_str!("../data/game/species.yaml")),
    ("game/backgrounds.yaml", include_str!("../data/game/backgrounds.yaml")),
];

/// All read-only game data: catalogs plus the playable option lists.
#[derive(Clone, Debug, Default)]
pub struct GameData {
    /// Grammar templates.
    pub control: ControlCatalog,
    /// Player-facing messages.
    pub strings: StringCatalog,
    /// Help text.
    pub help: HelpCatalog,
    /// Playable species, in file order.
    pub species: Vector<Species>,
    /// Playable backgrounds, in file order.
    pub backgrounds: Vector<Background>,
}

impl GameData {
    /// Loads the data set compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns a `DataFile` error if an embedded file does not parse.
    pub fn builtin() -> Result<Self> {
        Self::from_source(&Builtin)
    }

    /// Loads the data set from a directory, located as described in
    /// [`loader`].
    ///
    /// # Errors
    ///
    /// Returns a `DataFile` error if the directory or a file is missing, or a
    /// file does not parse.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::from_source(&Directory(loader::locate_dir(dir)?))
    }

    /// Checks that the player has something to choose from.
    ///
    /// # Errors
    ///
    /// Returns a `DataFile` error naming the empty list.
    pub fn ensure_playable(&self) -> Result<()> {
        if self.species.is_empty() {
            return Err(Error::data_file("game/species.yaml", "no species defined"));
        }
        if self.backgrounds.is_empty() {
            return Err(Error::data_file(
                "game/backgrounds.yaml",
                "no backgrounds defined",
            ));
        }
        Ok(())
    }

    fn from_source(source: &impl DataSource) -> Result<Self> {
        let mut data = GameData::default();

        for (stage, stem) in CONTROL_FILES {
            let raw: BTreeMap<String, Phrasings> = source.load(&format!("control/{stem}.yaml"))?;
            let control: StageControl = raw.into_iter().map(|(k, v)| (k, v.into_vec())).collect();
            data.control.insert_stage(*stage, control);
        }

        for (stage, stem) in STRING_FILES {
            data.strings
                .insert_stage(*stage, source.load(&format!("strings/{stem}.yaml"))?);
        }

        data.help = source.load("help.yaml")?;
        data.species = source.load::<Vec<Species>>("game/species.yaml")?.into();
        data.backgrounds = source
            .load::<Vec<Background>>("game/backgrounds.yaml")?
            .into();

        info!(
            species = data.species.len(),
            backgrounds = data.backgrounds.len(),
            source = source.describe(),
            "game data loaded"
        );
        Ok(data)
    }
}

/// Where data files come from.
trait DataSource {
    fn load<T: DeserializeOwned + Default>(&self, rel: &str) -> Result<T>;

    fn describe(&self) -> String;
}

struct Builtin;

impl DataSource for Builtin {
    fn load<T: DeserializeOwned + Default>(&self, rel: &str) -> Result<T> {
        let (_, content) = BUILTIN
            .iter()
            .find(|(path, _)| *path == rel)
            .ok_or_else(|| Error::data_file(rel, "not built in"))?;
        loader::parse(rel, content)
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

struct Directory(PathBuf);

impl DataSource for Directory {
    fn load<T: DeserializeOwned + Default>(&self, rel: &str) -> Result<T> {
        loader::read(&self.0.join(rel))
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

/// A command's templates: a single phrasing or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Phrasings {
    One(String),
    Many(Vec<String>),
}

impl Phrasings {
    fn into_vec(self) -> Vec<String> {
        match self {
            Phrasings::One(s) => vec![s],
            Phrasings::Many(v) => v,
        }
    }
}
