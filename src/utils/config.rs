//! Configuration management for playerkit
//!
//! This module handles loading and managing configuration
//! from config files and environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

use crate::utils::error::{IntoPlayerError, PlayerError, Result};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Localization settings
    pub locale: LocaleConfig,

    /// General settings
    pub general: GeneralConfig,
}

/// Localization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Display language as a BCP 47 tag; the system locale when unset
    pub language: Option<String>,

    /// Directory holding `<locale>/*.ftl` files layered over the built-in strings
    pub resource_dir: Option<PathBuf>,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A config file as written, every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    locale: LocaleOverlay,
    general: GeneralOverlay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocaleOverlay {
    language: Option<String>,
    resource_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneralOverlay {
    log_level: Option<String>,
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/playerkit/config.toml on Linux)
    /// 3. User config file (~/.config/playerkit/config.toml on Linux)
    /// 4. Environment variables (PLAYERKIT_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config.merge_from_file(&system_path)?;
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a single file on top of the defaults
    ///
    /// Environment overrides still apply.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlayerError::NotFound(path.display().to_string()));
        }

        let mut config = Self::default();
        config.merge_from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| PlayerError::Config("Cannot determine user config path".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).config_err("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).config_err("Failed to serialize config")?;
        std::fs::write(path, toml).config_err("Failed to write config file")?;

        Ok(())
    }

    /// Merge configuration from a TOML file
    ///
    /// Keys present in the file replace the current values; keys the
    /// file leaves out keep theirs.
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;
        let overlay: ConfigOverlay = toml::from_str(&contents).config_err("Failed to parse config file")?;

        if let Some(language) = overlay.locale.language {
            self.locale.language = Some(language);
        }
        if let Some(dir) = overlay.locale.resource_dir {
            self.locale.resource_dir = Some(dir);
        }
        if let Some(log_level) = overlay.general.log_level {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // Example: PLAYERKIT_LOCALE=zh-CN
        if let Ok(language) = std::env::var("PLAYERKIT_LOCALE") {
            self.locale.language = Some(language);
        }

        if let Ok(dir) = std::env::var("PLAYERKIT_RESOURCE_DIR") {
            self.locale.resource_dir = Some(PathBuf::from(dir));
        }

        if let Ok(log_level) = std::env::var("PLAYERKIT_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(language) = &self.locale.language {
            language
                .parse::<LanguageIdentifier>()
                .config_err(&format!("Invalid locale.language '{}'", language))?;
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(PlayerError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/playerkit/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("playerkit").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from("/Library/Application Support/playerkit/config.toml"));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("playerkit").join("config.toml"))
    }
}
