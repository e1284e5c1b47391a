use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::extract::{DEFAULT_DISPLAY_COUNT, FilterOptions, WordType};
use crate::paths;

/// Default settings in the `[tureng]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurengConfig {
    /// Default maximum display count.
    pub count: Option<usize>,
    /// Default word-type filter, e.g. `["noun", "verb"]`.
    pub types: Option<Vec<WordType>>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tureng/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub tureng: TurengConfig,
}

/// CLI-side overrides that take precedence over config file values.
///
/// `count` already reflects the `TURENG_DISPLAY_COUNT` environment
/// variable when the flag was not given (clap resolves that ordering).
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Display count override.
    pub count: Option<usize>,
    /// Word types selected by include flags; empty when no flag was given.
    pub types: Vec<WordType>,
}

/// Resolves the effective filter options by merging CLI/env overrides with
/// config file settings and built-in defaults.
#[must_use]
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> FilterOptions {
    let display_count = options
        .count
        .or(config_file.tureng.count)
        .unwrap_or(DEFAULT_DISPLAY_COUNT);

    let word_types = if options.types.is_empty() {
        config_file
            .tureng
            .types
            .clone()
            .filter(|types| !types.is_empty())
            .unwrap_or_else(|| WordType::ALL.to_vec())
    } else {
        options.types.clone()
    };

    FilterOptions {
        display_count,
        word_types,
    }
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager pointing at
    /// `$XDG_CONFIG_HOME/tureng/config.toml` (or `~/.config/tureng/config.toml`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it is missing
    /// or unreadable.
    #[must_use]
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
