//! Integration test utilities for playerkit
//!
//! This module provides common utilities for integration testing including:
//! - Temporary locale resource directories
//! - Temporary config files
//! - Helpers for taking time labels apart

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for integration tests
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new, empty fixture directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory that `write_ftl` populates
    pub fn locales_dir(&self) -> PathBuf {
        self.path().join("locales")
    }

    /// Write a Fluent file to `locales/<locale>/<name>`
    pub fn write_ftl(&self, locale: &str, name: &str, source: &str) -> Result<PathBuf> {
        let dir = self.locales_dir().join(locale);
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(name);
        std::fs::write(&path, source)?;
        Ok(path)
    }

    /// Write a config file and return its path
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.path().join("config.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Split a time label into `(hours, minutes, seconds)`
///
/// Kept independent of the library's own parser so the two can be checked
/// against each other.
pub fn split_label(label: &str) -> Result<(u64, u64, u64)> {
    let fields = label
        .split(':')
        .map(str::parse::<u64>)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match fields.as_slice() {
        [m, s] => Ok((0, *m, *s)),
        [h, m, s] => Ok((*h, *m, *s)),
        _ => bail!("unexpected label '{}'", label),
    }
}
