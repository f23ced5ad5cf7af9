// SPDX-License-Identifier: MPL-2.0
//! This module handles slider configuration: the serializable
//! [`SliderConfig`] that validates into [`SliderSettings`], and loading and
//! saving the demo's settings to a `slider.toml` file.
//!
//! # Numeric properties
//!
//! `min`, `max` and `step` accept either a TOML number or a string holding
//! one (`min = "0"`). Strings are parsed once, when the config is resolved;
//! anything unparsable is rejected instead of silently becoming `NaN`.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set the `ICED_SLIDER_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_slider::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.slider.thumb_label = true;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::slider::{
    Orientation, QuantizeAnchor, Range, RenderTuning, SliderSettings,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "slider.toml";
const APP_NAME: &str = "IcedSlider";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SLIDER_CONFIG_DIR";

// =============================================================================
// Numeric Properties
// =============================================================================

/// A number that may arrive as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericProp {
    Number(f64),
    Text(String),
}

impl NumericProp {
    /// Parses the property into a number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`] when the text is not a number.
    pub fn resolve(&self) -> Result<f64> {
        match self {
            NumericProp::Number(value) => Ok(*value),
            NumericProp::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::InvalidNumber(raw.clone())),
        }
    }
}

impl From<f64> for NumericProp {
    fn from(value: f64) -> Self {
        NumericProp::Number(value)
    }
}

impl From<&str> for NumericProp {
    fn from(raw: &str) -> Self {
        NumericProp::Text(raw.to_string())
    }
}

// =============================================================================
// Slider Section
// =============================================================================

/// Serializable slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SliderConfig {
    pub min: NumericProp,
    pub max: NumericProp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<NumericProp>,
    pub snap: bool,
    pub disabled: bool,
    pub vertical: bool,
    pub thumb_label: bool,
    pub drag_from_track: bool,
    pub quantize_anchor: QuantizeAnchor,
    pub render: RenderTuning,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: NumericProp::Number(DEFAULT_MIN),
            max: NumericProp::Number(DEFAULT_MAX),
            step: None,
            snap: false,
            disabled: false,
            vertical: false,
            thumb_label: false,
            drag_from_track: false,
            quantize_anchor: QuantizeAnchor::default(),
            render: RenderTuning::default(),
        }
    }
}

impl SliderConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Fails on unparsable numbers, `max <= min`, a non-positive step, or
    /// snapping without a step.
    pub fn resolve(&self) -> Result<SliderSettings> {
        let step = self.step.as_ref().map(NumericProp::resolve).transpose()?;
        let range = Range::new(self.min.resolve()?, self.max.resolve()?, step)?;

        let mut settings = SliderSettings::new(range)
            .with_disabled(self.disabled)
            .with_orientation(if self.vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            })
            .with_thumb_label(self.thumb_label)
            .with_drag_from_track(self.drag_from_track)
            .with_tuning(self.render);
        if self.snap {
            settings = settings.with_snap(self.quantize_anchor)?;
        }
        Ok(settings)
    }
}

// =============================================================================
// Config File
// =============================================================================

/// Persisted demo configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Value the demo starts with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub slider: SliderConfig,
}

/// Returns the config file path, preferring `base_dir`, then the
/// environment override, then the platform config directory.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
        .map(|mut path| {
            path.push(CONFIG_FILE);
            path
        })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring config at {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
