//! Rendering settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`. There
//! is no global singleton: callers parse a settings file once and fold it
//! into a [`Config`](crate::Config) snapshot.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// The built-in settings, parsed once.
pub fn default_settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Spell long vowels with circumflexes (â î û) instead of doubling.
    pub use_long_vowel_marks: bool,
    /// Keep the emphatic ḫ instead of folding it to h.
    pub use_emphatic: bool,
}

impl Default for Settings {
    fn default() -> Self {
        *default_settings()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}
