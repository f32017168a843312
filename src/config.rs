// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Besides the usual preference plumbing, the config carries the two policy
//! knobs the coordinate selector supports: whether a freshly constructed
//! selector starts with a centered default coordinate or stays unset until
//! the first click, and whether the hotspot marker is kept visible after the
//! reference image is swapped.
//!
//! # Examples
//!
//! ```no_run
//! use iced_hotspot::config::{self, Config, InitialValuePolicy};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.initial_value = Some(InitialValuePolicy::Unset);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedHotspot";

/// Policy applied to the selector's value at construction when the host
/// supplies no initial coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialValuePolicy {
    /// Store `{x: 45, y: 45}` and commit it immediately. The default, since
    /// validation would otherwise fail until the author clicks.
    #[default]
    CenterDefault,
    /// Leave the value unset until the first click.
    Unset,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub initial_value: Option<InitialValuePolicy>,
    #[serde(default)]
    pub restore_marker_on_image_swap: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: Some(InitialValuePolicy::CenterDefault),
            restore_marker_on_image_swap: Some(true),
        }
    }
}

impl Config {
    /// Effective initial-value policy after applying defaults.
    pub fn initial_value_policy(&self) -> InitialValuePolicy {
        self.initial_value.unwrap_or_default()
    }

    /// Whether the marker is re-applied after the reference image changes.
    pub fn restores_marker_on_image_swap(&self) -> bool {
        self.restore_marker_on_image_swap.unwrap_or(true)
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
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_center_default_policy() {
        let config = Config::default();
        assert_eq!(
            config.initial_value_policy(),
            InitialValuePolicy::CenterDefault
        );
        assert!(config.restores_marker_on_image_swap());
    }

    #[test]
    fn save_and_load_round_trips_policies() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            initial_value: Some(InitialValuePolicy::Unset),
            restore_marker_on_image_swap: Some(false),
        };
        save_to_path(&config, &path).expect("save config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.initial_value, Some(InitialValuePolicy::Unset));
        assert_eq!(loaded.restore_marker_on_image_swap, Some(false));
    }

    #[test]
    fn load_from_missing_keys_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "").expect("write empty config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.initial_value, None);
        assert_eq!(loaded.initial_value_policy(), InitialValuePolicy::CenterDefault);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "initial_value = 17").expect("write bad config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(
            loaded.initial_value_policy(),
            InitialValuePolicy::CenterDefault
        );
    }
}
