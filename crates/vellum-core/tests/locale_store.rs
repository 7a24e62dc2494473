use std::cell::RefCell;
use std::rc::Rc;

use vellum_core::{AppearanceConfig, Language, LocaleStore, PreferenceError, TranslationBundle};
use vellum_test_support::probe::FixedProbe;
use vellum_test_support::storage::{RecordingStore, StorageCall};

fn locale_with(store: &Rc<RecordingStore>, tag: Option<&str>) -> LocaleStore {
    let probe = tag.map_or_else(FixedProbe::absent, FixedProbe::tag);
    LocaleStore::new(
        &AppearanceConfig::default(),
        Rc::clone(store) as Rc<dyn vellum_core::KeyValueStore>,
        Rc::new(probe),
    )
}

#[test]
fn stored_preference_beats_any_browser_language() {
    for tag in [Some("pt-BR"), Some("en-US"), Some("xx"), None] {
        let store = Rc::new(RecordingStore::seeded(&[("preferredLanguage", "es")]));
        assert_eq!(locale_with(&store, tag).resolve_initial_language(), Language::Es);
    }
}

#[test]
fn browser_language_used_without_preference() {
    let store = Rc::new(RecordingStore::new());
    assert_eq!(locale_with(&store, Some("pt")).resolve_initial_language(), Language::Pt);
    assert_eq!(locale_with(&store, Some("es-ES")).resolve_initial_language(), Language::Es);
}

#[test]
fn unsupported_browser_language_defaults_to_english() {
    let store = Rc::new(RecordingStore::new());
    assert_eq!(locale_with(&store, Some("xx")).resolve_initial_language(), Language::En);
    assert_eq!(
        locale_with(&store, Some("invalid-lang")).resolve_initial_language(),
        Language::En
    );
}

#[test]
fn failing_read_skips_browser_and_defaults() {
    let store = Rc::new(RecordingStore::failing_reads());
    let locale = locale_with(&store, Some("pt-BR"));
    assert_eq!(locale.initialize(), Language::En);
    assert_eq!(locale.current(), Language::En);
}

#[test]
fn initialize_persists_browser_choice() {
    let store = Rc::new(RecordingStore::new());
    let locale = locale_with(&store, Some("es-ES"));
    assert_eq!(locale.initialize(), Language::Es);
    assert_eq!(
        store.calls(),
        vec![
            StorageCall::Get("preferredLanguage".into()),
            StorageCall::Set("preferredLanguage".into(), "es".into()),
        ]
    );
}

#[test]
fn set_language_persists_switches_bundle_and_notifies() {
    let store = Rc::new(RecordingStore::new());
    let locale = Rc::new(locale_with(&store, None));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _subscription = {
        let seen = Rc::clone(&seen);
        let store = Rc::clone(&store);
        let reader = Rc::clone(&locale);
        locale.subscribe(move |language| {
            // Persistence and the active bundle are already updated when subscribers run.
            assert_eq!(store.value("preferredLanguage").as_deref(), Some(language.code()));
            seen.borrow_mut().push((*language, reader.translate("app.title")));
        })
    };

    assert_eq!(locale.set_language(Language::Pt), Language::Pt);
    assert_eq!(
        *seen.borrow(),
        vec![(Language::Pt, "Template Vellum com Tema".to_string())]
    );
}

#[test]
fn write_failure_still_switches_language() {
    let store = Rc::new(RecordingStore::new());
    store.set_fail_writes(true);
    let locale = locale_with(&store, None);
    assert_eq!(locale.set_language(Language::Es), Language::Es);
    assert_eq!(locale.current(), Language::Es);
    assert_eq!(locale.translate("greeting"), "Hola");
    assert_eq!(store.value("preferredLanguage"), None);
}

#[test]
fn initialize_twice_yields_same_state() {
    let store = Rc::new(RecordingStore::new());
    let locale = locale_with(&store, Some("pt"));
    let notifications = Rc::new(RefCell::new(0_u32));
    let _subscription = {
        let notifications = Rc::clone(&notifications);
        locale.subscribe(move |_| *notifications.borrow_mut() += 1)
    };

    let first = locale.initialize();
    let second = locale.initialize();

    assert_eq!(first, second);
    assert_eq!(*notifications.borrow(), 1);
}

#[test]
fn translation_is_independent_of_previous_language() {
    let key = "features.title";
    for target in Language::all() {
        let expected = TranslationBundle::shared(target).text(key);
        for previous in Language::all() {
            let locale = locale_with(&Rc::new(RecordingStore::new()), None);
            locale.set_language(previous);
            locale.set_language(target);
            assert_eq!(locale.translate(key), expected);
            assert_eq!(locale.translate_in(key, target), expected);
        }
    }
}

#[test]
fn missing_keys_echo_back_in_every_language() {
    let locale = locale_with(&Rc::new(RecordingStore::new()), None);
    for language in Language::all() {
        assert_eq!(locale.translate_in("nonexistent.key", language), "nonexistent.key");
    }
}

#[test]
fn catalogs_have_identical_key_sets() {
    let english = TranslationBundle::shared(Language::En).keys();
    let portuguese = TranslationBundle::shared(Language::Pt).keys();
    let spanish = TranslationBundle::shared(Language::Es).keys();
    for key in &english {
        assert!(portuguese.contains(key), "pt is missing {key}");
        assert!(spanish.contains(key), "es is missing {key}");
    }
    assert_eq!(portuguese.len(), english.len());
    assert_eq!(spanish.len(), english.len());
}

#[test]
fn unsupported_code_is_reported_and_ignored() {
    let store = Rc::new(RecordingStore::new());
    let locale = locale_with(&store, None);
    locale.set_language(Language::Pt);
    store.clear_calls();

    assert_eq!(
        locale.set_language_code("fr"),
        Err(PreferenceError::UnsupportedLanguage { value: "fr".into() })
    );
    assert!(store.calls().is_empty());
    assert_eq!(locale.current(), Language::Pt);
}

#[test]
fn unsubscribed_listener_hears_nothing_more() {
    let locale = locale_with(&Rc::new(RecordingStore::new()), None);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let subscription = {
        let seen = Rc::clone(&seen);
        locale.subscribe(move |language| seen.borrow_mut().push(*language))
    };

    locale.set_language(Language::Es);
    subscription.unsubscribe();
    locale.set_language(Language::Pt);

    assert_eq!(*seen.borrow(), vec![Language::Es]);
}
