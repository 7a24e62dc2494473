#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    dead_code,
    unused,
    unused_imports,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! DOM-free locale and theme core for the Vellum web starter.
//!
//! Layout: `i18n` (languages and JSON catalogs), `locale.rs` (active-language store),
//! `theme.rs` (theme mode and controller), `signal.rs` (observable values),
//! `storage.rs`/`surface.rs`/`probe.rs` (seams to the browser), `config.rs`
//! (appearance defaults), `context.rs` (startup wiring), `error.rs`.

pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod probe;
pub mod signal;
pub mod storage;
pub mod surface;
pub mod theme;

pub use config::{AppearanceConfig, DEFAULT_SKINS, DEFAULT_THEME_MODE, MODERN_SKINS, SkinTable};
pub use context::{AppContext, InitialState};
pub use error::{ConfigError, CoreResult, PreferenceError, StorageError, SurfaceError};
pub use i18n::{DEFAULT_LANGUAGE, Language, TranslationBundle};
pub use locale::LocaleStore;
pub use probe::{LanguageProbe, NoProbe};
pub use signal::{Signal, Subscription};
pub use storage::{KeyValueStore, MemoryStore};
pub use surface::{DetachedSurface, DocumentSurface};
pub use theme::{ThemeController, ThemeMode};
