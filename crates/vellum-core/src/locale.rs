//! Active-language store: resolution, persistence and translation lookup.
//!
//! # Design
//! - Resolution order is stored preference, then the browser tag's primary subtag,
//!   then the configured default.
//! - A failing storage read short-circuits to the default; the probe is not consulted.
//! - `set_language` persists, then switches the active bundle, then publishes.

use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::config::AppearanceConfig;
use crate::error::CoreResult;
use crate::i18n::{Language, TranslationBundle};
use crate::probe::LanguageProbe;
use crate::signal::{Signal, Subscription};
use crate::storage::{KeyValueStore, read_or_log, write_or_log};

/// Owns the active language, its persistence and translation lookups.
pub struct LocaleStore {
    store: Rc<dyn KeyValueStore>,
    probe: Rc<dyn LanguageProbe>,
    key: Cow<'static, str>,
    default_language: Language,
    bundle: Cell<&'static TranslationBundle>,
    language: Signal<Language>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("language", &self.language.get())
            .field("default_language", &self.default_language)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl LocaleStore {
    /// Build a store; nothing is read or persisted until [`Self::initialize`].
    #[must_use]
    pub fn new(
        config: &AppearanceConfig,
        store: Rc<dyn KeyValueStore>,
        probe: Rc<dyn LanguageProbe>,
    ) -> Self {
        let default_language = config.default_language;
        Self {
            store,
            probe,
            key: config.storage_keys.language.clone(),
            default_language,
            bundle: Cell::new(TranslationBundle::shared(default_language)),
            language: Signal::new(default_language),
        }
    }

    /// Pick the language to start with.
    #[must_use]
    pub fn resolve_initial_language(&self) -> Language {
        let saved = match read_or_log(self.store.as_ref(), &self.key) {
            Ok(saved) => saved,
            Err(()) => return self.default_language,
        };
        if let Some(language) = saved.as_deref().and_then(Language::from_code) {
            return language;
        }
        if let Some(tag) = self.probe.language_tag() {
            if let Some(language) = Language::from_lang_tag(&tag) {
                return language;
            }
            tracing::debug!(tag = %tag, "browser language unsupported; using default");
        }
        self.default_language
    }

    /// Persist `language`, make it the active bundle and notify subscribers.
    pub fn set_language(&self, language: Language) -> Language {
        write_or_log(self.store.as_ref(), &self.key, language.code());
        self.bundle.set(TranslationBundle::shared(language));
        if self.language.set(language) {
            tracing::debug!(language = %language, "active language changed");
        }
        language
    }

    /// Apply a language given as a code string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PreferenceError::UnsupportedLanguage`] when `code` is not
    /// exactly one of the supported codes; nothing is persisted or published in that case.
    pub fn set_language_code(&self, code: &str) -> CoreResult<Language> {
        let language = code.parse()?;
        Ok(self.set_language(language))
    }

    /// Resolve the starting language and apply it.
    pub fn initialize(&self) -> Language {
        let language = self.resolve_initial_language();
        self.set_language(language)
    }

    /// Active language (the configured default before initialisation).
    #[must_use]
    pub fn current(&self) -> Language {
        self.language.get()
    }

    /// Translate `key` in the active language, returning the key when it is missing.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.bundle.get().text(key)
    }

    /// Translate `key` in `language`, returning the key when it is missing.
    #[must_use]
    pub fn translate_in(&self, key: &str, language: Language) -> String {
        TranslationBundle::shared(language).text(key)
    }

    /// Bundle of the active language.
    #[must_use]
    pub fn bundle(&self) -> &'static TranslationBundle {
        self.bundle.get()
    }

    /// Be notified synchronously whenever the active language changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&Language) + 'static) -> Subscription {
        self.language.subscribe(callback)
    }
}
