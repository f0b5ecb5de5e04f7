// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme
//! - `[testimonials]` - Endpoint, rotation interval, rating policy, request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `AKANNI_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use akanni::app::config::{self, Config};
//! use akanni::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme = Some(ThemeMode::Dark);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::testimonials::RatingPolicy;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Persisted theme flag. Missing means light.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_theme"
    )]
    pub theme: Option<ThemeMode>,
}

impl GeneralConfig {
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.unwrap_or(ThemeMode::Light)
    }
}

/// Remote testimonials settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestimonialsConfig {
    /// URL returning the JSON array of testimonial records.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Time each testimonial stays on screen.
    #[serde(
        default = "default_rotation_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_interval_ms: Option<u64>,

    /// Stars shown for a missing or zero rating (0 to 5).
    #[serde(
        default = "default_rating_when_missing",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_rating_when_missing: Option<u8>,

    /// HTTP timeout for the request.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            rotation_interval_ms: default_rotation_interval_ms(),
            default_rating_when_missing: default_rating_when_missing(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl TestimonialsConfig {
    /// Rotation interval, clamped to the supported range.
    #[must_use]
    pub fn rotation_interval(&self) -> Duration {
        let ms = self
            .rotation_interval_ms
            .unwrap_or(DEFAULT_ROTATION_INTERVAL_MS)
            .clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn rating_policy(&self) -> RatingPolicy {
        RatingPolicy::new(
            self.default_rating_when_missing
                .unwrap_or(DEFAULT_RATING_WHEN_MISSING),
        )
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
    }

    /// Applies the endpoint override chain: CLI flag, then environment.
    pub fn apply_endpoint_override(&mut self, cli_endpoint: Option<String>) {
        let env_endpoint = std::env::var(ENV_TESTIMONIALS_ENDPOINT)
            .ok()
            .filter(|value| !value.trim().is_empty());

        if let Some(endpoint) = cli_endpoint
            .filter(|value| !value.trim().is_empty())
            .or(env_endpoint)
        {
            self.endpoint = endpoint;
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote testimonials settings.
    #[serde(default)]
    pub testimonials: TestimonialsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_endpoint() -> String {
    DEFAULT_TESTIMONIALS_ENDPOINT.to_string()
}

fn default_rotation_interval_ms() -> Option<u64> {
    Some(DEFAULT_ROTATION_INTERVAL_MS)
}

fn default_rating_when_missing() -> Option<u8> {
    Some(DEFAULT_RATING_WHEN_MISSING)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme<'de, D>(deserializer: D) -> std::result::Result<Option<ThemeMode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::to_lowercase).as_deref() {
        None => Ok(None),
        Some("light") => Ok(Some(ThemeMode::Light)),
        Some("dark") => Ok(Some(ThemeMode::Dark)),
        Some("system") => Ok(Some(ThemeMode::System)),
        Some(other) => Err(D::Error::custom(format!("invalid theme: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

// =============================================================================
// Save Functions
// =============================================================================

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
