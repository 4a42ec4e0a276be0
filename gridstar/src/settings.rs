//! Settings files.
//!
//! Settings are JSON; every field is optional:
//!
//! ```json
//! { "search": { "rediscovery": "relax", "max_expansions": 5000 }, "ruler": true }
//! ```

use std::fs;
use std::path::Path;

use gridstar_paths::{Rediscovery, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Front-end settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Engine settings.
    pub search: SearchConfig,
    /// Print row and column numbers around boards.
    pub ruler: bool,
}

/// Command-line values layered over a settings file.
///
/// Flags can only switch things on: `relax` and `ruler` never turn off a
/// value the file enables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub relax: bool,
    pub max_expansions: Option<usize>,
    pub ruler: bool,
}

impl Settings {
    /// Load `config` when given, then apply `overrides` on top.
    pub fn resolve(config: Option<&Path>, overrides: Overrides) -> CliResult<Self> {
        let base = match config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    /// Apply command-line values over these settings.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.relax {
            self.search.rediscovery = Rediscovery::Relax;
        }
        if overrides.max_expansions.is_some() {
            self.search.max_expansions = overrides.max_expansions;
        }
        self.ruler |= overrides.ruler;
        self
    }

    /// Parse settings from JSON text.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Read settings from a file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| CliError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }
}
