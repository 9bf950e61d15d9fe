// SPDX-License-Identifier: MPL-2.0
//! This module handles the panner's configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_pan::config::{self, Binding, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Bind the joystick circle and speed things up
//! config.controls.insert("circle".to_string(), Binding::Selector("#circle".to_string()));
//! config.speed = Some(400.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.speed, Some(400.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::pan::{Control, Settings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPan";

/// What a control name is bound to: a selector, `true` for the control's
/// default `#pan-<name>` selector, or `false` to disable it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    Selector(String),
    Enabled(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fps: Option<u32>,
    pub speed: Option<f32>,
    /// An empty string disables the center target; the content then
    /// centers itself.
    pub content_center: Option<String>,
    pub center_duration_ms: Option<u64>,
    pub controls: BTreeMap<String, Binding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: Some(DEFAULT_FPS),
            speed: Some(DEFAULT_SPEED),
            content_center: Some(DEFAULT_CENTER_SELECTOR.to_string()),
            center_duration_ms: Some(DEFAULT_CENTER_DURATION_MS),
            controls: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Builds panner settings, clamping out-of-range values.
    #[must_use]
    pub fn to_settings(&self) -> Settings {
        let controls = self
            .controls
            .iter()
            .filter_map(|(name, binding)| match binding {
                Binding::Selector(selector) => Some((Control::from(name.as_str()), selector.clone())),
                Binding::Enabled(true) => {
                    let control = Control::from(name.as_str());
                    let selector = control.default_selector();
                    Some((control, selector))
                }
                Binding::Enabled(false) => None,
            })
            .collect();

        let content_center = match &self.content_center {
            Some(selector) if selector.is_empty() => None,
            Some(selector) => Some(selector.clone()),
            None => Some(DEFAULT_CENTER_SELECTOR.to_string()),
        };

        Settings {
            content_center,
            fps: self.fps.unwrap_or(DEFAULT_FPS).clamp(MIN_FPS, MAX_FPS),
            speed: self.speed.unwrap_or(DEFAULT_SPEED).max(0.0),
            controls,
            center_duration: Duration::from_millis(
                self.center_duration_ms.unwrap_or(DEFAULT_CENTER_DURATION_MS),
            ),
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
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
