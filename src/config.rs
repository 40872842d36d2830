//! Configuration file handling.
//!
//! This module provides loading and saving of lockscan configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lockscan/config.toml`
//! - macOS: `~/Library/Application Support/lockscan/config.toml`
//! - Windows: `%APPDATA%\lockscan\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! default_lockfile = "package-lock.json"
//! verbose = false
//! log_file = "scan_results.txt"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration.
///
/// Every field has a sensible default, and any CLI flag overrides its
/// config-file counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lockfile scanned when no `--file` flag is provided.
    ///
    /// Default: `package-lock.json` in the current directory
    pub default_lockfile: String,

    /// Whether verbose output is enabled by default.
    ///
    /// Default: false
    pub verbose: bool,

    /// File to append timestamped scan events to, if any.
    ///
    /// Default: none (console output only)
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_lockfile: "package-lock.json".to_string(),
            verbose: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lockscan")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    ///
    /// This is useful for showing users what the default config looks like.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
