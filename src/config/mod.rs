//! Configuration module for galr
//!
//! Manages application settings: output verbosity, the loading delay between
//! screens, an optional catalog file and the default log level.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Loading delay between screens when none is configured
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 800;

/// Keys accepted by `galr config get/set`
pub const CONFIG_KEYS: [&str; 4] = ["quiet", "transition_delay_ms", "catalog", "log_level"];

const fn default_transition_delay_ms() -> u64 {
    DEFAULT_TRANSITION_DELAY_MS
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GalrConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Loading delay shown between screens in browse mode
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,

    /// Catalog file to browse instead of the built-in images
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Log filter used when `GALR_LOG` is not set (e.g. "debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for GalrConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            catalog: None,
            log_level: None,
        }
    }
}

impl GalrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("galr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Loading delay between screens
    #[must_use]
    pub const fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    /// Read a setting as text
    ///
    /// Unset optional settings read as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "transition_delay_ms" => Ok(self.transition_delay_ms.to_string()),
            "catalog" => Ok(self
                .catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "log_level" => Ok(self.log_level.clone().unwrap_or_default()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Update a setting from text
    ///
    /// An empty value unsets `catalog` and `log_level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and `ConfigError::Message`
    /// for values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "transition_delay_ms" => {
                self.transition_delay_ms = value.parse::<u64>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for transition_delay_ms: '{value}'. Use a number of milliseconds"
                    ))
                })?;
            }
            "catalog" => {
                self.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "log_level" => {
                self.log_level = (!value.is_empty()).then(|| value.to_string());
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}
