// SPDX-License-Identifier: MPL-2.0
//! This module handles the session's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[toast]` - Toast stack behavior (capacity, placement, timing)
//! - `[booking]` - Booking policy (service fee, stay limits)
//! - `[diagnostics]` - Diagnostic event log sizing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `WANDERSTAY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use wanderstay_session::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.max_toasts = Some(8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::toast::ToastPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast stack settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Maximum number of toasts held at once. Pushing beyond this evicts
    /// the oldest toast.
    #[serde(
        default = "default_max_toasts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_toasts: Option<usize>,

    /// Screen anchor for toasts that do not choose their own position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<ToastPosition>,

    /// Auto-dismiss delay in milliseconds (0 keeps toasts until dismissed).
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: Some(DEFAULT_MAX_TOASTS),
            default_position: Some(ToastPosition::default()),
            default_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

/// Booking policy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    /// Service fee percentage charged on the stay subtotal.
    #[serde(
        default = "default_service_fee_percent",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_fee_percent: Option<u8>,

    /// Minimum number of nights per booking.
    #[serde(default = "default_min_nights", skip_serializing_if = "Option::is_none")]
    pub min_nights: Option<u32>,

    /// Maximum number of guests per booking.
    #[serde(default = "default_max_guests", skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            service_fee_percent: Some(DEFAULT_SERVICE_FEE_PERCENT),
            min_nights: Some(DEFAULT_MIN_NIGHTS),
            max_guests: Some(DEFAULT_MAX_GUESTS),
        }
    }
}

/// Diagnostic event log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Maximum number of diagnostic events retained in memory.
    #[serde(
        default = "default_event_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            event_capacity: Some(DEFAULT_EVENT_CAPACITY),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Session configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Toast stack settings.
    #[serde(default)]
    pub toast: ToastConfig,

    /// Booking policy settings.
    #[serde(default)]
    pub booking: BookingConfig,

    /// Diagnostic event log settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_TOASTS)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_service_fee_percent() -> Option<u8> {
    Some(DEFAULT_SERVICE_FEE_PERCENT)
}

fn default_min_nights() -> Option<u32> {
    Some(DEFAULT_MIN_NIGHTS)
}

fn default_max_guests() -> Option<u32> {
    Some(DEFAULT_MAX_GUESTS)
}

fn default_event_capacity() -> Option<usize> {
    Some(DEFAULT_EVENT_CAPACITY)
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
                Err(error) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read saved settings, using defaults: {error}"
                        )),
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
