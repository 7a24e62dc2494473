use std::cell::RefCell;
use std::rc::Rc;

use vellum_core::theme::{
    BACKGROUND_PROPERTY, BACKGROUND_TOKEN, DARK_CLASS, MODE_ATTRIBUTE, SKIN_ATTRIBUTE,
    TEXT_PROPERTY, TEXT_TOKEN,
};
use vellum_core::{AppearanceConfig, MODERN_SKINS, ThemeController, ThemeMode};
use vellum_test_support::document::RecordingDocument;
use vellum_test_support::storage::RecordingStore;

struct Fixture {
    store: Rc<RecordingStore>,
    document: Rc<RecordingDocument>,
    theme: ThemeController,
}

fn fixture_with(config: &AppearanceConfig, store: RecordingStore, document: RecordingDocument) -> Fixture {
    let store = Rc::new(store);
    let document = Rc::new(document);
    let theme = ThemeController::new(
        config,
        Rc::clone(&store) as Rc<dyn vellum_core::KeyValueStore>,
        Rc::clone(&document) as Rc<dyn vellum_core::DocumentSurface>,
    );
    Fixture {
        store,
        document,
        theme,
    }
}

fn fixture(store: RecordingStore) -> Fixture {
    fixture_with(&AppearanceConfig::default(), store, RecordingDocument::new())
}

#[test]
fn applying_dark_writes_every_effect() {
    let Fixture {
        store,
        document,
        theme,
    } = fixture(RecordingStore::new());

    theme.apply_theme(ThemeMode::Dark);

    assert_eq!(document.attribute(MODE_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(document.attribute(SKIN_ATTRIBUTE).as_deref(), Some("vintage"));
    assert!(document.has_class(DARK_CLASS));
    assert_eq!(document.style(BACKGROUND_PROPERTY).as_deref(), Some(BACKGROUND_TOKEN));
    assert_eq!(document.style(TEXT_PROPERTY).as_deref(), Some(TEXT_TOKEN));
    assert_eq!(store.value("mode").as_deref(), Some("dark"));
}

#[test]
fn applying_light_clears_dark_class() {
    let Fixture {
        store,
        document,
        theme,
    } = fixture(RecordingStore::new());

    theme.apply_theme(ThemeMode::Dark);
    theme.apply_theme(ThemeMode::Light);

    assert_eq!(document.attribute(MODE_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(document.attribute(SKIN_ATTRIBUTE).as_deref(), Some("skeleton"));
    assert!(!document.has_class(DARK_CLASS));
    assert_eq!(store.value("mode").as_deref(), Some("light"));
}

#[test]
fn reapplying_same_mode_rewrites_document() {
    let Fixture { document, theme, .. } = fixture(RecordingStore::new());
    theme.apply_theme(ThemeMode::Light);
    let after_first = document.write_count();
    theme.apply_theme(ThemeMode::Light);
    assert_eq!(document.write_count(), after_first * 2);
}

#[test]
fn toggle_flips_in_both_directions() {
    let Fixture { theme, .. } = fixture(RecordingStore::seeded(&[("mode", "light")]));
    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(theme.current(), ThemeMode::Dark);
    assert_eq!(theme.toggle(), ThemeMode::Light);
    assert_eq!(theme.current(), ThemeMode::Light);
}

#[test]
fn no_preference_starts_dark() {
    let Fixture {
        store,
        document,
        theme,
    } = fixture(RecordingStore::new());
    assert_eq!(theme.initialize(), ThemeMode::Dark);
    assert_eq!(document.attribute(MODE_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(store.writes_to("mode"), vec!["dark".to_string()]);
}

#[test]
fn failing_read_initialises_to_default() {
    let Fixture { document, theme, .. } = fixture(RecordingStore::failing_reads());
    assert_eq!(theme.initialize(), ThemeMode::Dark);
    assert!(document.has_class(DARK_CLASS));
}

#[test]
fn write_failure_keeps_visual_effects() {
    let Fixture {
        store,
        document,
        theme,
    } = fixture(RecordingStore::unavailable());

    assert_eq!(theme.initialize(), ThemeMode::Dark);
    theme.toggle();

    assert_eq!(document.attribute(MODE_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(document.attribute(SKIN_ATTRIBUTE).as_deref(), Some("skeleton"));
    assert!(!document.has_class(DARK_CLASS));
    assert_eq!(document.style(TEXT_PROPERTY).as_deref(), Some(TEXT_TOKEN));
    assert_eq!(theme.current(), ThemeMode::Light);
    assert_eq!(store.value("mode"), None);
}

#[test]
fn rejected_document_write_does_not_skip_the_rest() {
    let Fixture {
        store,
        document,
        theme,
    } = fixture_with(
        &AppearanceConfig::default(),
        RecordingStore::new(),
        RecordingDocument::rejecting_attribute(MODE_ATTRIBUTE),
    );

    theme.apply_theme(ThemeMode::Dark);

    assert_eq!(document.attribute(MODE_ATTRIBUTE), None);
    assert_eq!(document.attribute(SKIN_ATTRIBUTE).as_deref(), Some("vintage"));
    assert!(document.has_class(DARK_CLASS));
    assert_eq!(store.value("mode").as_deref(), Some("dark"));
}

#[test]
fn configured_defaults_and_skins_are_honoured() {
    let config = AppearanceConfig {
        default_mode: ThemeMode::Light,
        skins: MODERN_SKINS,
        ..AppearanceConfig::default()
    };
    let Fixture { document, theme, .. } =
        fixture_with(&config, RecordingStore::new(), RecordingDocument::new());

    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(document.attribute(SKIN_ATTRIBUTE).as_deref(), Some("modern"));
    theme.toggle();
    assert_eq!(document.attribute(SKIN_ATTRIBUTE).as_deref(), Some("gold-nouveau"));
}

#[test]
fn subscribers_follow_toggles() {
    let Fixture { theme, .. } = fixture(RecordingStore::seeded(&[("mode", "light")]));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let subscription = {
        let seen = Rc::clone(&seen);
        theme.subscribe(move |mode| seen.borrow_mut().push(*mode))
    };

    theme.initialize();
    theme.toggle();
    subscription.unsubscribe();
    theme.toggle();

    assert_eq!(*seen.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);
}
