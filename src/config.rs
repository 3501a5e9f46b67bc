//! Configuration file handling.
//!
//! The config file is optional TOML at the platform config directory
//! (`~/.config/promptline/config.toml` on Linux). It only selects from
//! built-in shells and palettes; it never defines new colors.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Errors from reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persistent prompt settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shell whose escape syntax the prompt is rendered for.
    /// Unset means the built-in default (bash).
    pub shell: Option<String>,
    /// Palette name, `dark` or `light`.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: None,
            theme: "dark".to_string(),
        }
    }
}

/// Outcome of `config init`.
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("promptline").join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Self::from_toml(&content)?)
    }

    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write this config to the config file, creating directories as
    /// needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = self.to_toml()?;
        fs::write(&path, content).map_err(|source| ConfigError::Write { path, source })
    }

    /// Create the config file with defaults unless it already exists.
    pub fn init() -> Result<InitResult, ConfigError> {
        let path = Self::config_path()?;
        if path.exists() {
            return Ok(InitResult::AlreadyExists(path));
        }
        Self::default().save()?;
        Ok(InitResult::Created(path))
    }

    /// Effective shell name: CLI flag first, then config, then bash.
    pub fn shell_name(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.shell.clone())
            .unwrap_or_else(|| "bash".to_string())
    }

    /// Effective palette name: CLI flag first, then config.
    pub fn theme_name(&self, flag: Option<&str>) -> String {
        flag.unwrap_or(&self.theme).to_string()
    }
}
