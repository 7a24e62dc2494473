//! Document state surface written by the theme controller.
//!
//! # Design
//! - The surface is the boundary to external styling rules: root attributes, one root
//!   class, and body style properties.
//! - Implementations report failures; the controller logs them and keeps applying.

use crate::error::SurfaceError;

/// Mutable view of the document root (`<html>`) and body.
pub trait DocumentSurface {
    /// Set attribute `name` on the document root.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the root is missing or rejects the attribute.
    fn set_root_attribute(&self, name: &'static str, value: &str) -> Result<(), SurfaceError>;

    /// Add (`present = true`) or remove class `name` on the document root.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the root is missing or its class list rejects the change.
    fn set_root_class(&self, name: &'static str, present: bool) -> Result<(), SurfaceError>;

    /// Set CSS `property` on the document body's inline style.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the body is missing or rejects the property.
    fn set_body_style(&self, property: &'static str, value: &str) -> Result<(), SurfaceError>;
}

/// Surface that accepts every write and discards it (non-browser contexts).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetachedSurface;

impl DocumentSurface for DetachedSurface {
    fn set_root_attribute(&self, _name: &'static str, _value: &str) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn set_root_class(&self, _name: &'static str, _present: bool) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn set_body_style(&self, _property: &'static str, _value: &str) -> Result<(), SurfaceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_surface_accepts_writes() {
        let surface = DetachedSurface;
        assert_eq!(surface.set_root_attribute("data-mode", "dark"), Ok(()));
        assert_eq!(surface.set_root_class("dark", true), Ok(()));
        assert_eq!(surface.set_body_style("color", "var(--app-text)"), Ok(()));
    }
}
