// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `$IMGSEL_CONFIG`, falling back to
//! `<config dir>/imgsel/config.toml`:
//! - `inventory`: path to the JSON inventory snapshot
//! - `log_level`: tracing filter used when `RUST_LOG` is unset
//! - `output`: default output format for `images`
//! - `[prune]`: defaults for `prune` (`all`, `filters`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "imgsel";
const CONFIG_FILE_NAME: &str = "config.toml";
const INVENTORY_FILE_NAME: &str = "inventory.json";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the inventory snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<PathBuf>,
    /// Tracing filter directive (e.g. `debug`, `imgsel_core=trace`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Default output format for `images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
    #[serde(default)]
    pub prune: PruneConfig,
}

/// Defaults for `imgsel prune`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PruneConfig {
    /// Prune every unused image, not just dangling ones.
    #[serde(default)]
    pub all: bool,
    /// Filters applied to every prune, before those given on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,
}

impl Config {
    /// Loads configuration from `$IMGSEL_CONFIG` or the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        match env::config_path().or_else(default_config_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Loads configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(Error::Config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the inventory path: `flag`, then `$IMGSEL_INVENTORY`, then
    /// the config file, then `<data dir>/imgsel/inventory.json`.
    pub fn inventory_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(env::inventory_path)
            .or_else(|| self.inventory.clone())
            .or_else(default_inventory_path)
            .ok_or_else(|| {
                Error::Config("cannot determine a data directory for the inventory".to_string())
            })
    }

    /// Output format for `images`: the flag if given, else the configured default.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output).unwrap_or_default()
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_inventory_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(INVENTORY_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
