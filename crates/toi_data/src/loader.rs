//! YAML data file loading.
//!
//! A data directory `dir` is searched for in several locations: `dir`
//! itself, `../dir`, and `/usr/share/toi/dir`. Files are then read from
//! inside the first one found.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use toi_foundation::{Error, Result};
use tracing::debug;

/// System-wide data directory searched last.
pub const SYSTEM_DATA_DIR: &str = "/usr/share/toi";

/// Returns the locations searched for `path`, in order. An absolute path
/// has a single location.
#[must_use]
pub fn candidates(path: &Path) -> Vec<PathBuf> {
    if path.is_absolute() {
        return vec![path.to_path_buf()];
    }
    vec![
        path.to_path_buf(),
        Path::new("..").join(path),
        Path::new(SYSTEM_DATA_DIR).join(path),
    ]
}

/// Finds the data directory, searching the standard locations.
///
/// # Errors
///
/// Returns a `DataFile` error if no candidate is a directory.
pub fn locate_dir(dir: &Path) -> Result<PathBuf> {
    let found = candidates(dir).into_iter().find(|c| c.is_dir());
    match found {
        Some(found) => {
            debug!(path = %found.display(), "using data directory");
            Ok(found)
        }
        None => Err(Error::data_file(dir.display().to_string(), "directory not found")),
    }
}

/// Reads and parses one YAML file.
///
/// # Errors
///
/// Returns a `DataFile` error naming the file if it cannot be read or does
/// not parse.
pub fn read<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let label = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| Error::data_file(label.as_str(), e))?;
    parse(&label, &content)
}

/// Parses YAML text. An empty document yields `T::default()`.
///
/// # Errors
///
/// Returns a `DataFile` error labelled with `label` if parsing fails.
pub fn parse<T: DeserializeOwned + Default>(label: &str, content: &str) -> Result<T> {
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(content).map_err(|e| Error::data_file(label, e))
}
