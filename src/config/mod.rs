// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_picker::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPicker";

/// Seconds before the completion notice dismisses itself.
pub const DEFAULT_TOAST_DURATION_SECS: u64 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Auto-dismiss delay for the completion notice; `None` keeps it up
    /// until the user closes it.
    #[serde(default)]
    pub toast_duration_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            toast_duration_secs: Some(DEFAULT_TOAST_DURATION_SECS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_auto_dismisses_the_toast() {
        let config = Config::default();
        assert_eq!(config.language, None);
        assert_eq!(
            config.toast_duration_secs,
            Some(DEFAULT_TOAST_DURATION_SECS)
        );
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            language: Some("fr".to_string()),
            toast_duration_secs: None,
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.language, Some("fr".to_string()));
        assert_eq!(loaded.toast_duration_secs, None);
    }

    #[test]
    fn missing_toast_duration_defaults_to_none() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "language = \"en-US\"\n").expect("Failed to write config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.language, Some("en-US".to_string()));
        assert_eq!(loaded.toast_duration_secs, None);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("nope.toml");
        assert!(load_from_path(&path).is_err());
    }
}
