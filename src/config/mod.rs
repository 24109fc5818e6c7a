//! TOML configuration for building a logger without code.
//!
//! ```toml
//! level = "debug"
//! output = "~/.local/state/myapp/app.log"
//! template = "verbose"
//! time_format = "%H:%M:%S"
//! prefix = "myapp"
//! ```

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::logger::RFC3339;
use crate::output::Target;
use crate::template::Template;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_DIR: &str = "plainlog";
const CONFIG_FILE: &str = "plainlog.toml";

/// An empty file must still produce a working logger, so every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level name, matched case-insensitively.
    pub level: String,
    /// `stderr`, `stdout`, `discard` or a file path.
    pub output: String,
    /// `default`, `verbose`, or literal template text.
    pub template: String,
    /// strftime pattern for `${time}`.
    pub time_format: String,
    /// Value of `${prefix}`.
    pub prefix: String,
    /// Minimum level of plainlog's own diagnostics.
    pub internal_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: "stderr".to_string(),
            template: "default".to_string(),
            time_format: RFC3339.to_string(),
            prefix: String::new(),
            internal_level: "warning".to_string(),
        }
    }
}

impl Config {
    /// Reads the config from the platform config directory; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or the TOML is invalid.
    pub fn load() -> Result<Self, Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info(format_args!("config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug(format_args!(
                "config file {} not found, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        content.parse()
    }

    /// `<config dir>/plainlog/plainlog.toml`, e.g. `~/.config/plainlog/plainlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Strict: an unrecognized name is an error, never the `Unknown` sentinel.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for a name outside the six known labels.
    pub fn parse_level(&self) -> Result<Level, Error> {
        self.level.parse::<Level>().map_err(Error::from)
    }

    /// Diagnostics are best-effort, so a bad value falls back to `Warning`.
    #[must_use]
    pub fn parse_internal_level(&self) -> Level {
        self.internal_level.parse().unwrap_or(Level::Warning)
    }

    #[must_use]
    pub fn parse_template(&self) -> Template {
        match self.template.trim().to_lowercase().as_str() {
            "" | "default" => Template::default(),
            "verbose" => Template::verbose(),
            _ => Template::parse(&self.template),
        }
    }

    #[must_use]
    pub fn parse_target(&self) -> Target {
        Target::parse(&self.output)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(Error::from)
    }
}
