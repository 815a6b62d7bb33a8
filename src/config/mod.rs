//! Configuration module for filmroom
//!
//! Holds search limits, display settings and default dataset locations.
//! Configuration is read from the user's config directory
//! (`~/.config/filmroom/config.toml` on Linux) and may be overridden by
//! `FILMROOM_*` environment variables, e.g. `FILMROOM_MIN_QUERY_LENGTH=3`.
//! A missing file simply means defaults.

use crate::search::MIN_QUERY_LENGTH;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default cap on clip search results
pub const DEFAULT_CLIP_LIMIT: usize = 20;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilmroomConfig {
    /// Shortest library search query that produces results
    pub min_query_length: usize,

    /// Maximum number of clip search results
    pub clip_result_limit: usize,

    /// Separator between folder names when printing search paths
    pub path_separator: String,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Plays dataset used when `--plays` is not given
    pub plays_path: Option<PathBuf>,

    /// Library dataset used when `--library` is not given
    pub library_path: Option<PathBuf>,

    /// Clips dataset used when `--clips` is not given
    pub clips_path: Option<PathBuf>,
}

impl Default for FilmroomConfig {
    fn default() -> Self {
        Self {
            min_query_length: MIN_QUERY_LENGTH,
            clip_result_limit: DEFAULT_CLIP_LIMIT,
            path_separator: " / ".to_string(),
            quiet: false,
            plays_path: None,
            library_path: None,
            clips_path: None,
        }
    }
}

impl FilmroomConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("filmroom").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// Without a config directory there is no file to read; defaults plus the
    /// environment are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment contain invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_layered(Some(&path)),
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::load_layered(None)
            }
        }
    }

    /// Load configuration from a specific file, layered with the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or a value
    /// has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(Some(path))
    }

    fn load_layered(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        let settings = builder
            .add_source(Environment::with_prefix("FILMROOM").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        match path {
            Some(path) => log::debug!("Loaded configuration from {}: {config:?}", path.display()),
            None => log::debug!("Loaded configuration from the environment: {config:?}"),
        }
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// writing fails.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
