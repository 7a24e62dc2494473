//! Display text for the home shell, assembled from a translation bundle.
//!
//! # Design
//! - Built per render from the active bundle; components only read these values.
//! - Language buttons carry native names so every option stays recognisable in any locale.

use vellum_core::{Language, ThemeMode, TranslationBundle};

/// Catalog keys of the feature list, in display order.
pub const FEATURE_KEYS: [&str; 5] = [
    "features.theme",
    "features.accessibility",
    "features.rust",
    "features.testing",
    "features.i18n",
];

/// One entry of the language selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    /// Language selected by the button.
    pub language: Language,
    /// Short visible badge (`EN`, `PT`, `ES`).
    pub badge: &'static str,
    /// Accessible name in the language's own spelling.
    pub label: &'static str,
    /// Whether this is the active language.
    pub pressed: bool,
}

/// Visible and accessible labels for the theme switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeToggleLabels {
    /// Accessible name of the switch.
    pub toggle: String,
    /// Name of the mode currently applied.
    pub state: String,
    /// Whether the switch is on (dark mode).
    pub checked: bool,
}

/// Every string the home shell renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellLabels {
    /// Page heading.
    pub title: String,
    /// Text under the heading.
    pub subtitle: String,
    /// Greeting line.
    pub welcome: String,
    /// Heading of the feature list.
    pub features_title: String,
    /// Feature list entries.
    pub features: Vec<String>,
    /// Footer text.
    pub footer: String,
    /// Accessible name of the language selector group.
    pub language_select: String,
    /// Language selector buttons in `EN, PT, ES` order.
    pub languages: Vec<LanguageOption>,
    /// Theme switch labels.
    pub theme: ThemeToggleLabels,
}

impl ShellLabels {
    /// Assemble labels for `bundle`'s language and the applied `mode`.
    #[must_use]
    pub fn new(bundle: &TranslationBundle, mode: ThemeMode) -> Self {
        let active = bundle.language();
        let state_key = match mode {
            ThemeMode::Light => "theme.light",
            ThemeMode::Dark => "theme.dark",
        };
        Self {
            title: bundle.text("app.title"),
            subtitle: bundle.text("app.subtitle"),
            welcome: bundle.text("welcome"),
            features_title: bundle.text("features.title"),
            features: FEATURE_KEYS.iter().map(|key| bundle.text(key)).collect(),
            footer: bundle.text("footer.copyright"),
            language_select: bundle.text("language_select.label"),
            languages: language_options(active),
            theme: ThemeToggleLabels {
                toggle: bundle.text("theme.toggle"),
                state: bundle.text(state_key),
                checked: mode.is_dark(),
            },
        }
    }
}

/// Selector entries with `active` marked as pressed.
#[must_use]
pub fn language_options(active: Language) -> Vec<LanguageOption> {
    Language::all()
        .iter()
        .map(|language| LanguageOption {
            language: *language,
            badge: language.badge(),
            label: language.label(),
            pressed: *language == active,
        })
        .collect()
}
