use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use genlines_lines::Mode;
use genlines_utils::error::ConfigError;

use crate::ConfigSource;

/// Line width used when neither the CLI, the environment nor a config file sets one.
pub const DEFAULT_WIDTH: usize = 80;

/// Environment variable overriding the line width.
pub const ENV_WIDTH: &str = "GENLINES_WIDTH";

/// Environment variable overriding the content mode.
pub const ENV_MODE: &str = "GENLINES_MODE";

/// Resolved configuration with per-key source attribution.
#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: Defaults,
    pub source_attribution: HashMap<String, ConfigSource>,
    /// Config file that contributed values, if any.
    pub config_path: Option<PathBuf>,
}

/// The `[defaults]` table of `.genlines/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub width: Option<usize>,
    pub mode: Option<String>,
    pub mode_arg: Option<String>,
    pub overwrite: Option<bool>,
    pub verbose: Option<bool>,
}

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlConfig {
    pub(crate) defaults: Option<Defaults>,
}

impl Config {
    #[must_use]
    pub fn width(&self) -> usize {
        self.defaults.width.unwrap_or(DEFAULT_WIDTH)
    }

    /// The configured content mode; unset or blank means ascii.
    pub fn mode(&self) -> Result<Mode, ConfigError> {
        let raw = self.defaults.mode.as_deref().unwrap_or_default();
        Mode::parse(raw).map_err(|err| ConfigError::InvalidValue {
            key: "mode".to_string(),
            value: err.to_string(),
        })
    }

    #[must_use]
    pub fn mode_arg(&self) -> Option<&str> {
        self.defaults.mode_arg.as_deref()
    }

    /// Pre-answered overwrite question, if one was configured.
    #[must_use]
    pub fn overwrite(&self) -> Option<bool> {
        self.defaults.overwrite
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.defaults.verbose.unwrap_or(false)
    }

    /// Where the value for `key` came from.
    #[must_use]
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .copied()
            .unwrap_or(ConfigSource::Default)
    }

    /// Whether `key` still holds the built-in default.
    #[must_use]
    pub fn is_default(&self, key: &str) -> bool {
        self.source_of(key) == ConfigSource::Default
    }
}
