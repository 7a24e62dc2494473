//! Contexts wired to recording fakes.

use std::rc::Rc;

use vellum_core::{AppContext, AppearanceConfig};

use crate::document::RecordingDocument;
use crate::probe::FixedProbe;
use crate::storage::RecordingStore;

/// An [`AppContext`] plus handles to the fakes behind it.
#[derive(Debug)]
pub struct Harness {
    /// Store shared by both controllers.
    pub store: Rc<RecordingStore>,
    /// Document written by the theme controller.
    pub document: Rc<RecordingDocument>,
    /// Context under test.
    pub context: AppContext,
}

impl Harness {
    /// Wire `store` and a browser reporting `tag` with the default configuration.
    #[must_use]
    pub fn new(store: RecordingStore, tag: Option<&str>) -> Self {
        Self::with_config(AppearanceConfig::default(), store, RecordingDocument::new(), tag)
    }

    /// Fully specified harness.
    #[must_use]
    pub fn with_config(
        config: AppearanceConfig,
        store: RecordingStore,
        document: RecordingDocument,
        tag: Option<&str>,
    ) -> Self {
        let store = Rc::new(store);
        let document = Rc::new(document);
        let probe = tag.map_or_else(FixedProbe::absent, FixedProbe::tag);
        let context = AppContext::new(
            config,
            Rc::clone(&store) as Rc<dyn vellum_core::KeyValueStore>,
            Rc::clone(&document) as Rc<dyn vellum_core::DocumentSurface>,
            Rc::new(probe),
        );
        Self {
            store,
            document,
            context,
        }
    }
}
