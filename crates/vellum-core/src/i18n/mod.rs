//! Lightweight JSON-backed translations with per-language bundles.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::PreferenceError;

/// Supported display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Portuguese.
    Pt,
    /// Spanish.
    Es,
}

impl Language {
    /// All supported languages in selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Pt, Self::Es]
    }

    /// Two-letter code persisted under the language preference key.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
        }
    }

    /// Native name, used as the accessible name of selector buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
            Self::Es => "Español",
        }
    }

    /// Short uppercase badge shown on selector buttons.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Pt => "PT",
            Self::Es => "ES",
        }
    }

    /// Exact match against a supported code (`en`, `pt`, `es`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|language| language.code() == code)
    }

    /// Map a browser language tag (`pt-BR`, `EN`) to a supported language by its primary subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let primary = lowered.split('-').next().unwrap_or_default();
        Self::from_code(primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_code(value).ok_or_else(|| PreferenceError::UnsupportedLanguage {
            value: value.to_string(),
        })
    }
}

/// Default fallback language.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Translation bundle holding the parsed JSON tree for one language.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    language: Language,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl TranslationBundle {
    /// Parse the embedded catalog for `language`.
    ///
    /// A catalog that fails to parse yields an empty bundle; lookups then return their keys.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let tree = serde_json::from_str(raw_catalog(language)).unwrap_or_else(|err| {
            tracing::error!(language = %language, error = %err, "translation catalog is not valid JSON");
            Value::Null
        });
        Self { language, tree }
    }

    /// Shared, lazily parsed bundle for `language`.
    #[must_use]
    pub fn shared(language: Language) -> &'static Self {
        match language {
            Language::En => &EN,
            Language::Pt => &PT,
            Language::Es => &ES,
        }
    }

    /// Language backing this bundle.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Resolve a dotted key (`section.key`), returning `None` when it is absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        resolve(&self.tree, key)
    }

    /// Resolve a dotted key, returning the key itself when it is absent.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Every dotted key that resolves to a string in this bundle.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_keys(&self.tree, &mut String::new(), &mut keys);
        keys
    }
}

static EN: LazyLock<TranslationBundle> = LazyLock::new(|| TranslationBundle::new(Language::En));
static PT: LazyLock<TranslationBundle> = LazyLock::new(|| TranslationBundle::new(Language::Pt));
static ES: LazyLock<TranslationBundle> = LazyLock::new(|| TranslationBundle::new(Language::Es));

fn resolve<'a>(tree: &'a Value, key: &str) -> Option<&'a str> {
    if let Some(direct) = tree.get(key).and_then(Value::as_str) {
        return Some(direct);
    }
    let mut node = tree;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

fn collect_keys(node: &Value, prefix: &mut String, keys: &mut BTreeSet<String>) {
    match node {
        Value::String(_) => {
            keys.insert(prefix.clone());
        }
        Value::Object(map) => {
            for (segment, child) in map {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                collect_keys(child, prefix, keys);
                prefix.truncate(restore);
            }
        }
        _ => {}
    }
}

const fn raw_catalog(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../../locales/en.json"),
        Language::Pt => include_str!("../../locales/pt.json"),
        Language::Es => include_str!("../../locales/es.json"),
    }
}
