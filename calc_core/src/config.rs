//! Configuration file support for calc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/calc/config.toml`.

use crate::operation_log::DEFAULT_DUMP_HEADER;
use crate::{Error, OperationLog, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Audit echo and tracing configuration
#[derive(Clone, Debug, Deserialize)]
pub struct LogConfig {
    /// Emit each audit line as a tracing event as well as storing it
    #[serde(default = "default_echo")]
    pub echo: bool,

    /// Default filter level when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            echo: default_echo(),
            level: default_level(),
        }
    }
}

/// Output formatting configuration
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_header")]
    pub header: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
        }
    }
}

// Default value functions
fn default_echo() -> bool {
    true
}

fn default_level() -> String {
    "warn".into()
}

fn default_header() -> String {
    DEFAULT_DUMP_HEADER.into()
}

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::debug!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if a config directory is known
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("calc").join("config.toml"))
    }

    /// Reject values the rest of the program cannot use
    pub fn validate(&self) -> Result<()> {
        let level = self.log.level.to_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "Unknown log level '{}', expected one of {}",
                self.log.level,
                LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Build an empty operation log using these settings
    pub fn operation_log(&self) -> OperationLog {
        OperationLog::new()
            .with_echo(self.log.echo)
            .with_header(self.display.header.clone())
    }
}
