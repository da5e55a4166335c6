//! Game settings.

use std::path::PathBuf;

use toi_data::GameData;
use toi_foundation::Result;
use tracing::info;

use crate::io::DEFAULT_PAGE_LINES;

/// Settings gathered from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Directory to load data files from; the built-in data when `None`.
    pub data_dir: Option<PathBuf>,
    /// Lines per page of output; `None` disables pagination.
    pub page_lines: Option<usize>,
    /// `tracing` filter used when `TOI_LOG` is not set.
    pub log_filter: String,
    /// Whether to print the title banner at startup.
    pub show_banner: bool,
    /// Read input from this file instead of the terminal.
    pub script: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_lines: Some(DEFAULT_PAGE_LINES),
            log_filter: "warn".to_string(),
            show_banner: true,
            script: None,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads data from `dir` instead of the built-in set.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Sets the pagination threshold.
    #[must_use]
    pub fn with_page_lines(mut self, page_lines: Option<usize>) -> Self {
        self.page_lines = page_lines;
        self
    }

    /// Sets the fallback log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Turns the banner off.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Reads input from a script file.
    #[must_use]
    pub fn with_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.script = Some(path.into());
        self
    }

    /// Loads the configured data set.
    ///
    /// # Errors
    ///
    /// Returns a `DataFile` error if a data file is missing or malformed.
    pub fn load_data(&self) -> Result<GameData> {
        let data = match &self.data_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "loading data directory");
                GameData::load(dir)?
            }
            None => GameData::builtin()?,
        };
        data.ensure_playable()?;
        Ok(data)
    }
}
