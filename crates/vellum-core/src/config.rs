//! Appearance configuration: defaults, skin table and preference keys.
//!
//! # Design
//! - Every knob lives in one struct so the presentation layer can swap it wholesale.
//! - All fields default, so a partial JSON document only overrides what it names.
//! - Skin identifiers are data, not control flow.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::{DEFAULT_LANGUAGE, Language};
use crate::theme::ThemeMode;

/// Storage key holding the language preference.
pub const LANGUAGE_KEY: &str = "preferredLanguage";
/// Storage key holding the theme mode preference.
pub const MODE_KEY: &str = "mode";
/// Mode applied when no preference is stored or it cannot be read.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::Dark;

/// Skeleton skins: `skeleton` for light, `vintage` for dark.
pub const DEFAULT_SKINS: SkinTable = SkinTable {
    light: Cow::Borrowed("skeleton"),
    dark: Cow::Borrowed("vintage"),
};

/// Alternate skins: `modern` for light, `gold-nouveau` for dark.
pub const MODERN_SKINS: SkinTable = SkinTable {
    light: Cow::Borrowed("modern"),
    dark: Cow::Borrowed("gold-nouveau"),
};

/// Mode → skin identifier table written to the root `data-theme` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinTable {
    /// Skin used in light mode.
    pub light: Cow<'static, str>,
    /// Skin used in dark mode.
    pub dark: Cow<'static, str>,
}

impl SkinTable {
    /// Skin identifier for `mode`.
    #[must_use]
    pub fn for_mode(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for SkinTable {
    fn default() -> Self {
        DEFAULT_SKINS
    }
}

/// Keys under which the controllers persist their preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageKeys {
    /// Key for the language code.
    pub language: Cow<'static, str>,
    /// Key for the theme mode.
    pub mode: Cow<'static, str>,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            language: Cow::Borrowed(LANGUAGE_KEY),
            mode: Cow::Borrowed(MODE_KEY),
        }
    }
}

/// Appearance configuration shared by the locale store and theme controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppearanceConfig {
    /// Mode used when nothing usable is persisted.
    pub default_mode: ThemeMode,
    /// Language used when neither preference nor browser language is usable.
    pub default_language: Language,
    /// Mode → skin identifier table.
    pub skins: SkinTable,
    /// Persistence keys.
    pub storage_keys: StorageKeys,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_mode: DEFAULT_THEME_MODE,
            default_language: DEFAULT_LANGUAGE,
            skins: DEFAULT_SKINS,
            storage_keys: StorageKeys::default(),
        }
    }
}

impl AppearanceConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// [`ConfigError::InvalidField`] when a skin identifier or storage key is blank or the
    /// two storage keys collide.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skins.light.trim().is_empty() {
            return Err(blank("skins.light"));
        }
        if self.skins.dark.trim().is_empty() {
            return Err(blank("skins.dark"));
        }
        if self.storage_keys.language.trim().is_empty() {
            return Err(blank("storage_keys.language"));
        }
        if self.storage_keys.mode.trim().is_empty() {
            return Err(blank("storage_keys.mode"));
        }
        if self.storage_keys.language == self.storage_keys.mode {
            return Err(ConfigError::InvalidField {
                field: "storage_keys",
                reason: "language and mode keys must differ",
            });
        }
        Ok(())
    }
}

const fn blank(field: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        reason: "must not be blank",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = AppearanceConfig::default();
        assert_eq!(config.default_mode, ThemeMode::Dark);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.skins.for_mode(ThemeMode::Light), "skeleton");
        assert_eq!(config.skins.for_mode(ThemeMode::Dark), "vintage");
        assert_eq!(config.storage_keys.language, "preferredLanguage");
        assert_eq!(config.storage_keys.mode, "mode");
    }

    #[test]
    fn partial_json_overrides_named_fields() -> Result<(), ConfigError> {
        let config = AppearanceConfig::from_json(
            r#"{"default_mode": "light", "skins": {"light": "modern", "dark": "gold-nouveau"}}"#,
        )?;
        assert_eq!(config.default_mode, ThemeMode::Light);
        assert_eq!(config.skins, MODERN_SKINS);
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.storage_keys, StorageKeys::default());
        Ok(())
    }

    #[test]
    fn empty_document_yields_defaults() -> Result<(), ConfigError> {
        assert_eq!(AppearanceConfig::from_json("{}")?, AppearanceConfig::default());
        Ok(())
    }

    #[test]
    fn unknown_fields_and_values_are_rejected() {
        assert!(matches!(
            AppearanceConfig::from_json(r#"{"palette": "x"}"#),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            AppearanceConfig::from_json(r#"{"default_mode": "sepia"}"#),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            AppearanceConfig::from_json(r#"{"default_language": "fr"}"#),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn blank_and_colliding_fields_are_rejected() {
        assert!(matches!(
            AppearanceConfig::from_json(r#"{"skins": {"light": " ", "dark": "vintage"}}"#),
            Err(ConfigError::InvalidField {
                field: "skins.light",
                ..
            })
        ));
        assert!(matches!(
            AppearanceConfig::from_json(r#"{"storage_keys": {"language": "k", "mode": "k"}}"#),
            Err(ConfigError::InvalidField {
                field: "storage_keys",
                ..
            })
        ));
    }
}
