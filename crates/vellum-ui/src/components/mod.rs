pub(crate) mod home;
pub(crate) mod language_selector;
pub(crate) mod theme_toggle;
