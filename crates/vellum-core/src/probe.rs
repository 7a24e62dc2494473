//! Environment probe reporting the browser's preferred language tag.

/// Source of the environment's language tag (`navigator.language` in browsers).
pub trait LanguageProbe {
    /// Reported tag such as `en-US`, or `None` when the environment has no answer.
    fn language_tag(&self) -> Option<String>;
}

/// Probe for contexts without a browser; never reports a tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoProbe;

impl LanguageProbe for NoProbe {
    fn language_tag(&self) -> Option<String> {
        None
    }
}
