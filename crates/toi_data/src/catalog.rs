//! Control, message, and help catalogs.
//!
//! - [`ControlCatalog`] - grammar templates keyed by stage and command
//! - [`StringCatalog`] - player-facing messages keyed by stage and key
//! - [`HelpCatalog`] - help index and per-topic help text

use std::collections::BTreeMap;

use serde::Deserialize;
use toi_foundation::{Error, Result, interpolate, normalize};

/// Templates for one stage: command name -> alternative phrasings.
pub type StageControl = BTreeMap<String, Vec<String>>;

/// Grammar templates for every stage.
#[derive(Clone, Debug, Default)]
pub struct ControlCatalog {
    stages: BTreeMap<String, StageControl>,
}

impl ControlCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the templates for a stage.
    pub fn insert_stage(&mut self, stage: impl Into<String>, control: StageControl) {
        self.stages.insert(stage.into(), control);
    }

    /// Adds templates for one command. Builder form, mostly for tests.
    #[must_use]
    pub fn with_command<S: Into<String>>(
        mut self,
        stage: &str,
        command: &str,
        templates: impl IntoIterator<Item = S>,
    ) -> Self {
        self.stages
            .entry(stage.to_string())
            .or_default()
            .insert(command.to_string(), templates.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the templates for `stage`/`command`.
    ///
    /// # Errors
    ///
    /// Returns `MissingControl` if the stage or command is absent or has no
    /// templates.
    pub fn templates(&self, stage: &str, command: &str) -> Result<&[String]> {
        match self.stages.get(stage).and_then(|s| s.get(command)) {
            Some(templates) if !templates.is_empty() => Ok(templates.as_slice()),
            _ => Err(Error::missing_control(stage, command)),
        }
    }

    /// Lists the command names defined for a stage.
    pub fn commands(&self, stage: &str) -> impl Iterator<Item = &str> {
        self.stages
            .get(stage)
            .into_iter()
            .flat_map(|s| s.keys().map(String::as_str))
    }
}

/// Messages for one stage: key -> text.
pub type StageStrings = BTreeMap<String, String>;

/// Player-facing messages for every stage.
#[derive(Clone, Debug, Default)]
pub struct StringCatalog {
    stages: BTreeMap<String, StageStrings>,
}

impl StringCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the messages for a stage.
    pub fn insert_stage(&mut self, stage: impl Into<String>, strings: StageStrings) {
        self.stages.insert(stage.into(), strings);
    }

    /// Adds a single message. Builder form, mostly for tests.
    #[must_use]
    pub fn with_string(mut self, stage: &str, key: &str, text: impl Into<String>) -> Self {
        self.stages
            .entry(stage.to_string())
            .or_default()
            .insert(key.to_string(), text.into());
        self
    }

    /// Returns a message.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the message is absent.
    pub fn get(&self, stage: &str, key: &str) -> Result<&str> {
        self.stages
            .get(stage)
            .and_then(|s| s.get(key))
            .map(String::as_str)
            .ok_or_else(|| Error::missing_string(stage, key))
    }

    /// Returns a message with `{placeholder}`s filled in.
    ///
    /// # Errors
    ///
    /// Returns `MissingString` if the message is absent.
    pub fn format(&self, stage: &str, key: &str, values: &[(&str, &str)]) -> Result<String> {
        Ok(interpolate(self.get(stage, key)?, values))
    }
}

/// Help index and topics.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HelpCatalog {
    /// Text shown for general help.
    #[serde(default)]
    pub index: String,
    /// Topic name -> help text.
    #[serde(default)]
    topics: BTreeMap<String, String>,
}

impl HelpCatalog {
    /// Creates a catalog from an index text and topics.
    #[must_use]
    pub fn new(index: impl Into<String>, topics: BTreeMap<String, String>) -> Self {
        Self {
            index: index.into(),
            topics,
        }
    }

    /// Looks up a topic. Both sides are compared normalized.
    #[must_use]
    pub fn topic(&self, topic: &str) -> Option<&str> {
        let wanted = normalize(topic);
        self.topics
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(_, text)| text.as_str())
    }

    /// Lists topic names in sorted order.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }
}
