//! Configuration management
//!
//! An optional `cardbox.toml` next to the deck supplies default import and
//! export paths; command-line flags override it.

use crate::error::{CardboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deck file to load before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Deck file to write when the session ends.
    pub export_to: Option<PathBuf>,
}

impl Config {
    /// Load config from the given path. A missing file yields the defaults;
    /// a malformed one is a startup error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(CardboxError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| CardboxError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Fold command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        import_from: Option<PathBuf>,
        export_to: Option<PathBuf>,
    ) -> Self {
        if import_from.is_some() {
            self.import_from = import_from;
        }
        if export_to.is_some() {
            self.export_to = export_to;
        }
        self
    }
}
