//! Language probe returning a fixed answer.

use vellum_core::LanguageProbe;

/// Probe that always reports the tag it was built with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedProbe(Option<String>);

impl FixedProbe {
    /// Probe reporting `tag`.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }

    /// Probe with no answer, like a non-browser context.
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }
}

impl LanguageProbe for FixedProbe {
    fn language_tag(&self) -> Option<String> {
        self.0.clone()
    }
}
