use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".multitool.toml";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    /// Keep a final `\n` out of the transform and restore it afterwards.
    pub preserve_trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            preserve_trailing_newline: true,
        }
    }
}

/// One config file. Only the keys it sets take part in merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub preserve_trailing_newline: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Values given on the command line; `None` leaves the file setting alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    /// Transform input verbatim, final newline included.
    pub raw: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("Loading global config from {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("Loading local config from {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(config.apply(overrides))
    }

    /// A single file laid over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(preserve) = layer.preserve_trailing_newline {
            self.preserve_trailing_newline = preserve;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.no_color {
            self.color = false;
        }
        if overrides.raw {
            self.preserve_trailing_newline = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "multitool").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
