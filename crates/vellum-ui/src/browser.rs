//! `web-sys` implementations of the core's storage, document and language seams.
//!
//! Values go through `Storage` untouched so the persisted strings stay plain codes.

use vellum_core::{
    DocumentSurface, KeyValueStore, Language, LanguageProbe, StorageError, SurfaceError,
};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Storage};

/// Root attribute mirroring the active language.
const LANG_ATTRIBUTE: &str = "lang";

/// `window.localStorage`.
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                detail: describe(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                detail: describe(&err),
            })
    }
}

/// `document.documentElement` and `document.body`.
pub(crate) struct BrowserDocument;

impl DocumentSurface for BrowserDocument {
    fn set_root_attribute(&self, name: &'static str, value: &str) -> Result<(), SurfaceError> {
        root()?
            .set_attribute(name, value)
            .map_err(|err| SurfaceError::Attribute {
                name,
                detail: describe(&err),
            })
    }

    fn set_root_class(&self, name: &'static str, present: bool) -> Result<(), SurfaceError> {
        root()?
            .class_list()
            .toggle_with_force(name, present)
            .map(|_| ())
            .map_err(|err| SurfaceError::Class {
                name,
                detail: describe(&err),
            })
    }

    fn set_body_style(&self, property: &'static str, value: &str) -> Result<(), SurfaceError> {
        body()?
            .style()
            .set_property(property, value)
            .map_err(|err| SurfaceError::Style {
                property,
                detail: describe(&err),
            })
    }
}

/// `navigator.language`.
pub(crate) struct NavigatorProbe;

impl LanguageProbe for NavigatorProbe {
    fn language_tag(&self) -> Option<String> {
        web_sys::window().and_then(|window| window.navigator().language())
    }
}

/// Write the active language code to the root `lang` attribute.
pub(crate) fn mirror_language(language: Language) {
    let result = BrowserDocument.set_root_attribute(LANG_ATTRIBUTE, language.code());
    if let Err(err) = result {
        tracing::warn!(error = %err, "failed to mirror document language");
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
        detail: "no window".to_string(),
    })?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable {
            detail: "localStorage disabled".to_string(),
        }),
        Err(err) => Err(StorageError::Unavailable {
            detail: describe(&err),
        }),
    }
}

fn root() -> Result<Element, SurfaceError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or(SurfaceError::Unavailable)
}

fn body() -> Result<HtmlElement, SurfaceError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .ok_or(SurfaceError::Unavailable)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
