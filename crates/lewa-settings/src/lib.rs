//! # lewa-settings
//!
//! Layered configuration for the lewa client crates.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`LewaSettings::default()`]
//! 2. **User file** — `~/.lewa/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `LEWA_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use lewa_settings::get_settings;
//!
//! let settings = get_settings();
//! println!("live server: {}", settings.live.base_url);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{LewaSettings, LiveSettings, WidgetSettings, DEFAULT_WIDGET_CONFIG_URL};

use std::sync::OnceLock;

/// Global settings singleton.
///
/// Initialized on first access via [`get_settings`]. The settings are loaded
/// from `~/.lewa/settings.json` with env var overrides, or fall back to
/// compiled defaults if loading fails.
static SETTINGS: OnceLock<LewaSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.lewa/settings.json` with env var
/// overrides. On subsequent calls, returns the cached value. If loading
/// fails, returns compiled defaults.
pub fn get_settings() -> &'static LewaSettings {
    SETTINGS.get_or_init(|| load_settings().unwrap_or_default())
}

/// Initialize the global settings with a specific value.
///
/// # Errors
///
/// Returns the provided settings back if the global was already initialized.
pub fn init_settings(settings: LewaSettings) -> std::result::Result<(), LewaSettings> {
    SETTINGS.set(settings)
}
