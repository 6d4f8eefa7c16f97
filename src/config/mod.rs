//! Sink selection and its few knobs, built in code or loaded from TOML.

mod structs;

pub use structs::{FileConfig, GeneralConfig};

use crate::internal;
use crate::level::{Level, ParseLevelError};
use crate::logger::Logger;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working logger: `#[serde(default)]`
/// on every field makes zero-config work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
}

impl Config {
    /// The canonical constructor: only the sink choice, everything else default.
    #[must_use]
    pub fn new(write_to_file: bool) -> Self {
        Self {
            general: GeneralConfig {
                write_to_file,
                ..GeneralConfig::default()
            },
            file: FileConfig::default(),
        }
    }

    #[must_use]
    pub const fn write_to_file(&self) -> bool {
        self.general.write_to_file
    }

    /// Binds a logger to `caller` and `module`, backed by the sink this config selects.
    #[must_use]
    pub fn log_help(&self, caller: &str, module: &str) -> Logger {
        Logger::from_config(self, caller, module)
    }

    /// Reads the config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or TOML parsing fails.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns error on TOML syntax or type mismatches.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/twinlog/twinlog.toml`, e.g. `~/.config/twinlog/twinlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("twinlog").join("twinlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// Returns the unparsable string when `general.diagnostics` is not a level name.
    pub fn diagnostics_level(&self) -> Result<Level, ParseLevelError> {
        self.general.diagnostics.parse()
    }
}
