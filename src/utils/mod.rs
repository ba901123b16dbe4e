//! Utility module for playerkit
//!
//! This module provides the stateless helpers shared by player front-ends:
//! - Playback time labels
//! - Domain-scoped error records and the crate's error type
//! - Configuration management

pub mod config;
pub mod duration;
pub mod error;

// Re-export commonly used items
pub use config::{Config, GeneralConfig, LocaleConfig};
pub use duration::{format_duration, format_duration_secs, parse_duration, DurationParts};
pub use error::{fail, make_error, ErrorRecord, IntoPlayerError, PlayerError, Result};

/// Initialize the configuration
///
/// Loads configuration from:
/// 1. Default values
/// 2. System configuration file
/// 3. User configuration file
/// 4. Environment variables
pub fn load_config() -> Result<Config> {
    Config::load()
}
