//! Startup context bundling both controllers.

use std::rc::Rc;

use crate::config::AppearanceConfig;
use crate::i18n::Language;
use crate::locale::LocaleStore;
use crate::probe::{LanguageProbe, NoProbe};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::surface::{DetachedSurface, DocumentSurface};
use crate::theme::{ThemeController, ThemeMode};

/// Built once at startup and handed to the presentation layer.
#[derive(Debug)]
pub struct AppContext {
    config: AppearanceConfig,
    locale: LocaleStore,
    theme: ThemeController,
}

/// Values chosen by [`AppContext::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitialState {
    /// Language applied at startup.
    pub language: Language,
    /// Theme mode applied at startup.
    pub mode: ThemeMode,
}

impl AppContext {
    /// Wire both controllers to the same store.
    #[must_use]
    pub fn new(
        config: AppearanceConfig,
        store: Rc<dyn KeyValueStore>,
        surface: Rc<dyn DocumentSurface>,
        probe: Rc<dyn LanguageProbe>,
    ) -> Self {
        let locale = LocaleStore::new(&config, Rc::clone(&store), probe);
        let theme = ThemeController::new(&config, store, surface);
        Self {
            config,
            locale,
            theme,
        }
    }

    /// Context with in-memory storage, no document and no browser probe.
    #[must_use]
    pub fn detached(config: AppearanceConfig) -> Self {
        Self::new(
            config,
            Rc::new(MemoryStore::new()),
            Rc::new(DetachedSurface),
            Rc::new(NoProbe),
        )
    }

    /// Initialise the locale store, then the theme controller.
    pub fn initialize(&self) -> InitialState {
        let language = self.locale.initialize();
        let mode = self.theme.initialize();
        tracing::info!(language = %language, mode = %mode, "appearance initialised");
        InitialState { language, mode }
    }

    /// Locale store.
    #[must_use]
    pub const fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    /// Theme controller.
    #[must_use]
    pub const fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Configuration the context was built from.
    #[must_use]
    pub const fn config(&self) -> &AppearanceConfig {
        &self.config
    }
}
