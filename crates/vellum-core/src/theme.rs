//! Light/dark theme mode and the controller that applies it to the document.
//!
//! # Design
//! - Two states, transitions only through [`ThemeController::apply_theme`] and
//!   [`ThemeController::toggle`].
//! - Every apply writes all document effects and then persists; a failing write is
//!   logged and never rolls back or skips the remaining effects.
//! - The applied mode is published through a [`Signal`] so controls re-render on toggle.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{AppearanceConfig, SkinTable};
use crate::error::{CoreResult, PreferenceError, SurfaceError};
use crate::signal::{Signal, Subscription};
use crate::storage::{KeyValueStore, read_or_log, write_or_log};
use crate::surface::DocumentSurface;

/// Root attribute carrying the mode name.
pub const MODE_ATTRIBUTE: &str = "data-mode";
/// Root attribute carrying the skin identifier.
pub const SKIN_ATTRIBUTE: &str = "data-theme";
/// Root class present only in dark mode.
pub const DARK_CLASS: &str = "dark";
/// Body style property bound to the background token.
pub const BACKGROUND_PROPERTY: &str = "background-color";
/// Body style property bound to the text token.
pub const TEXT_PROPERTY: &str = "color";
/// Theme variable backing the body background.
pub const BACKGROUND_TOKEN: &str = "var(--app-background)";
/// Theme variable backing the body text colour.
pub const TEXT_TOKEN: &str = "var(--app-text)";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::UnsupportedThemeMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Owns the active theme mode, its persistence and its document effects.
pub struct ThemeController {
    store: Rc<dyn KeyValueStore>,
    surface: Rc<dyn DocumentSurface>,
    skins: SkinTable,
    key: Cow<'static, str>,
    default_mode: ThemeMode,
    mode: Signal<ThemeMode>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode.get())
            .field("default_mode", &self.default_mode)
            .field("skins", &self.skins)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Build a controller; nothing is read or applied until [`Self::initialize`].
    #[must_use]
    pub fn new(
        config: &AppearanceConfig,
        store: Rc<dyn KeyValueStore>,
        surface: Rc<dyn DocumentSurface>,
    ) -> Self {
        Self {
            store,
            surface,
            skins: config.skins.clone(),
            key: config.storage_keys.mode.clone(),
            default_mode: config.default_mode,
            mode: Signal::new(config.default_mode),
        }
    }

    /// Persisted mode when readable and valid, otherwise the configured default.
    #[must_use]
    pub fn resolve_initial_mode(&self) -> ThemeMode {
        match read_or_log(self.store.as_ref(), &self.key) {
            Ok(Some(saved)) => saved.parse().unwrap_or_else(|_| {
                tracing::debug!(saved = %saved, "ignoring unrecognised stored theme mode");
                self.default_mode
            }),
            Ok(None) | Err(()) => self.default_mode,
        }
    }

    /// Resolve the initial mode and apply it.
    pub fn initialize(&self) -> ThemeMode {
        let mode = self.resolve_initial_mode();
        self.apply_theme(mode);
        mode
    }

    /// Write every document effect for `mode`, persist it and publish it.
    pub fn apply_theme(&self, mode: ThemeMode) {
        let surface = self.surface.as_ref();
        report(surface.set_root_attribute(MODE_ATTRIBUTE, mode.as_str()));
        report(surface.set_root_class(DARK_CLASS, mode.is_dark()));
        report(surface.set_root_attribute(SKIN_ATTRIBUTE, self.skins.for_mode(mode)));
        report(surface.set_body_style(BACKGROUND_PROPERTY, BACKGROUND_TOKEN));
        report(surface.set_body_style(TEXT_PROPERTY, TEXT_TOKEN));
        write_or_log(self.store.as_ref(), &self.key, mode.as_str());

        tracing::debug!(mode = %mode, skin = self.skins.for_mode(mode), "theme applied");
        self.mode.set(mode);
    }

    /// Apply the opposite of the current mode and return it.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().opposite();
        self.apply_theme(next);
        next
    }

    /// Apply a mode given by name.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::UnsupportedThemeMode`] for anything but `light` or
    /// `dark`; nothing is applied in that case.
    pub fn set_mode_name(&self, name: &str) -> CoreResult<ThemeMode> {
        let mode = name.parse()?;
        self.apply_theme(mode);
        Ok(mode)
    }

    /// Currently applied mode (the configured default before initialisation).
    #[must_use]
    pub fn current(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Skin identifier for the current mode.
    #[must_use]
    pub fn current_skin(&self) -> &str {
        self.skins.for_mode(self.current())
    }

    /// Be notified synchronously whenever the applied mode changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&ThemeMode) + 'static) -> Subscription {
        self.mode.subscribe(callback)
    }
}

fn report(result: Result<(), SurfaceError>) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "document surface write failed");
    }
}
