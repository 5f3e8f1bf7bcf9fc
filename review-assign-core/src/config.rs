//! Bot settings
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (REVIEW_ASSIGN_*)
//! 3. Settings file (~/.config/review-assign/config.toml)
//! 4. Default values
//!
//! These are settings of the bot process itself. The reviewer pool lives in
//! each repository, see [`crate::AppConfig`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_config::DEFAULT_CONFIG_PATH;
use crate::{Error, Result};

/// Repository-related settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RepositorySettings {
    /// Path of the reviewer configuration inside each repository
    pub config_path: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
        }
    }
}

/// Root settings structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub repository: RepositorySettings,
}

impl Settings {
    /// Load settings from the default location
    ///
    /// Returns defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_settings_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Returns `~/.config/review-assign/config.toml` on Unix
    pub fn default_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("review-assign").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - REVIEW_ASSIGN_CONFIG_PATH: repository path of the reviewer config
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("REVIEW_ASSIGN_CONFIG_PATH") {
            if !path.trim().is_empty() {
                self.repository.config_path = path;
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, config_path: Option<String>) -> Self {
        if let Some(path) = config_path {
            self.repository.config_path = path;
        }

        self
    }

    /// Load settings with all overrides applied
    ///
    /// Priority: CLI > env > settings file > defaults
    pub fn load_with_overrides(config_path: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(config_path))
    }
}
