//! Appearance configuration bundled with the UI.

use vellum_core::AppearanceConfig;

/// JSON embedded at build time from `config/appearance.json`.
pub const APPEARANCE_JSON: &str = include_str!("../config/appearance.json");

/// Parse the embedded configuration, falling back to the built-in defaults.
#[must_use]
pub fn appearance_config() -> AppearanceConfig {
    parse_or_default(APPEARANCE_JSON)
}

/// Parse `raw`; a rejected document is logged and replaced by the defaults.
#[must_use]
pub fn parse_or_default(raw: &str) -> AppearanceConfig {
    AppearanceConfig::from_json(raw).unwrap_or_else(|err| {
        tracing::error!(error = %err, "appearance config rejected; using defaults");
        AppearanceConfig::default()
    })
}
