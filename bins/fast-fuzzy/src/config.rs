//! Configuration file loading
//!
//! An optional TOML file supplies default search options:
//!
//! ```toml
//! [search]
//! threshold = 0.4
//! limit = 10
//! ignore_case = true
//! normalize = true
//! ```

use anyhow::{Context, Result};
use fast_fuzzy::SearchOptionsBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration schema
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSchema {
    /// Defaults for the `search` command
    #[serde(default)]
    pub search: SearchOptionsBuilder,
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or the standard locations.
    ///
    /// An explicit path must exist; the standard locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        "fast-fuzzy.toml",
        ".fast-fuzzy.toml",
        ".config/fast-fuzzy.toml",
    ];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
