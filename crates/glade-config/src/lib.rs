//! Configuration file handling for the glade park timer.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/glade` on Linux). A missing file means defaults; a malformed
//! file is reported instead of being silently replaced.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use glade_core::{ColorTheme, ResizePolicy};
use serde::{Deserialize, Serialize};

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while reading or writing the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a home directory for the config file")]
    NoHomeDirectory,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color theme of the stopwatch readout.
    pub color_theme: ColorTheme,
    /// Whether the animated park is drawn behind the readout.
    pub background: bool,
    /// How entity positions follow terminal resizes.
    pub resize_policy: ResizePolicy,
    /// Target time between animation frames, in milliseconds.
    pub frame_interval_ms: u64,
    /// Stopwatch tick period, in milliseconds.
    pub tick_interval_ms: u64,
    /// Quote rotation period, in milliseconds.
    pub quote_interval_ms: u64,
    /// Fixed seed for the particle field; random when unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            background: true,
            resize_policy: ResizePolicy::default(),
            frame_interval_ms: 33,
            tick_interval_ms: 1000,
            quote_interval_ms: 10_000,
            seed: None,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "glade")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDirectory)
    }

    /// Load the config at `path`, falling back to defaults when it is missing.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Reject settings the event loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_interval_ms",
                reason: "must be greater than zero",
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be greater than zero",
            });
        }
        if self.quote_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "quote_interval_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn quote_interval(&self) -> Duration {
        Duration::from_millis(self.quote_interval_ms)
    }
}
