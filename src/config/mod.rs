// SPDX-License-Identifier: MPL-2.0
//! Host display preferences, loaded from and saved to a `toaster.toml` file.
//!
//! Applications embedding the crate typically load this once at startup and
//! hand it to [`Manager::with_config`](crate::Manager::with_config). Every
//! field is optional; absent fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config, Position};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::TopRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "iced_toaster";

/// Screen corner the toast stack anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display duration in milliseconds before auto-dismissal.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    /// Maximum number of simultaneously visible toasts.
    #[serde(default)]
    pub max_visible: Option<usize>,
    /// Corner the toast stack anchors to.
    #[serde(default)]
    pub position: Option<Position>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(defaults::DEFAULT_DURATION_MS),
            max_visible: Some(defaults::DEFAULT_MAX_VISIBLE),
            position: Some(Position::BottomRight),
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
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_defaults_module() {
        let config = Config::default();
        assert_eq!(
            config.default_duration_ms,
            Some(defaults::DEFAULT_DURATION_MS)
        );
        assert_eq!(config.max_visible, Some(defaults::DEFAULT_MAX_VISIBLE));
        assert_eq!(config.position, Some(Position::BottomRight));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let config: Config = toml::from_str("max_visible = 5").unwrap();
        assert_eq!(config.max_visible, Some(5));
        assert_eq!(config.default_duration_ms, None);
        assert_eq!(config.position, None);
    }

    #[test]
    fn position_uses_kebab_case_tags() {
        let config: Config = toml::from_str(r#"position = "top-right""#).unwrap();
        assert_eq!(config.position, Some(Position::TopRight));
    }

    #[test]
    fn unknown_position_tag_is_a_config_error() {
        let result: std::result::Result<Config, _> =
            toml::from_str(r#"position = "middle""#);
        assert!(result.is_err());
    }
}
