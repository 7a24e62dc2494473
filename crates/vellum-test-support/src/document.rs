//! Document surface that keeps the written state in memory.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use vellum_core::{DocumentSurface, SurfaceError};

/// Records root attributes, root classes and body styles as a browser would hold them.
#[derive(Debug, Default)]
pub struct RecordingDocument {
    attributes: RefCell<BTreeMap<&'static str, String>>,
    classes: RefCell<BTreeSet<&'static str>>,
    styles: RefCell<BTreeMap<&'static str, String>>,
    writes: RefCell<usize>,
    rejected_attribute: RefCell<Option<&'static str>>,
}

impl RecordingDocument {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document that rejects writes to attribute `name`.
    #[must_use]
    pub fn rejecting_attribute(name: &'static str) -> Self {
        let document = Self::new();
        *document.rejected_attribute.borrow_mut() = Some(name);
        document
    }

    /// Root attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Whether the root carries class `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }

    /// Body inline style value.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    /// Number of write calls observed, rejected ones included.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn count(&self) {
        *self.writes.borrow_mut() += 1;
    }
}

impl DocumentSurface for RecordingDocument {
    fn set_root_attribute(&self, name: &'static str, value: &str) -> Result<(), SurfaceError> {
        self.count();
        if *self.rejected_attribute.borrow() == Some(name) {
            return Err(SurfaceError::Attribute {
                name,
                detail: "rejected by test".to_string(),
            });
        }
        self.attributes.borrow_mut().insert(name, value.to_string());
        Ok(())
    }

    fn set_root_class(&self, name: &'static str, present: bool) -> Result<(), SurfaceError> {
        self.count();
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(name);
        } else {
            classes.remove(name);
        }
        Ok(())
    }

    fn set_body_style(&self, property: &'static str, value: &str) -> Result<(), SurfaceError> {
        self.count();
        self.styles.borrow_mut().insert(property, value.to_string());
        Ok(())
    }
}
