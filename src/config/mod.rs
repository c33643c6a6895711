// SPDX-License-Identifier: MPL-2.0
//! This module handles the pipeline's configuration, including loading and
//! saving host preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[capture]` - Camera preferences (preferred facing mode)
//! - `[codec]` - Encoding settings (JPEG bake quality)
//! - `[import]` - Import settings (alt text placeholder and clear policy)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `SHUTTERBOX_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! The configuration is an explicit value handed down to the components that
//! need it; nothing in this crate reads ambient global settings.

pub mod defaults;

pub use defaults::*;

use crate::capture::Facing;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "SHUTTERBOX_CONFIG_DIR";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// What to do when the host explicitly clears an image's alt text.
///
/// Hosts disagree on whether clearing should stick, so the choice is a host
/// policy rather than a core guarantee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AltTextPolicy {
    /// A cleared alt text falls back to the configured placeholder.
    #[default]
    FallbackToDefault,
    /// A cleared alt text persists as an empty string.
    KeepEmpty,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Camera capture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CaptureConfig {
    /// Facing mode requested when the camera is first opened.
    #[serde(default)]
    pub facing: Facing,
}

/// Raster encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodecConfig {
    /// JPEG quality used when baking an adjustment or capturing a frame.
    /// Clamped to the valid range on use.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// Import settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportConfig {
    /// Policy applied when the host clears an image's alt text.
    #[serde(default)]
    pub alt_text_policy: AltTextPolicy,

    /// Placeholder description for images without one.
    #[serde(default = "default_alt_text")]
    pub default_alt_text: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            alt_text_policy: AltTextPolicy::default(),
            default_alt_text: default_alt_text(),
        }
    }
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn default_alt_text() -> String {
    DEFAULT_ALT_TEXT.to_string()
}

// =============================================================================
// Top-level Config
// =============================================================================

/// The full pipeline configuration, passed down to the components that
/// need it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

impl Config {
    /// Returns the configured JPEG quality clamped to the valid range.
    #[must_use]
    pub fn jpeg_quality(&self) -> u8 {
        self.codec.jpeg_quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
    }

    /// Resolves an alt text the host supplied (possibly empty) against the
    /// configured clear policy.
    #[must_use]
    pub fn resolve_alt_text(&self, input: &str) -> String {
        if !input.trim().is_empty() {
            return input.to_string();
        }
        match self.import.alt_text_policy {
            AltTextPolicy::FallbackToDefault => self.import.default_alt_text.clone(),
            AltTextPolicy::KeepEmpty => String::new(),
        }
    }
}

// =============================================================================
// Load / Save
// =============================================================================

/// Returns the directory the config file lives in.
///
/// Honors the `SHUTTERBOX_CONFIG_DIR` override, then falls back to the
/// platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("shutterbox"))
}

fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Returns the default configuration (plus a warning message) when the file
/// is missing or unreadable; a broken config file must never prevent the
/// pipeline from starting.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (
            Config::default(),
            Some("could not determine a config directory".to_string()),
        );
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err.to_string())),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default location, creating the config
/// directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| Error::Config("could not determine a config directory".to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path.
pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path.as_ref(), contents)?;
    Ok(())
}
