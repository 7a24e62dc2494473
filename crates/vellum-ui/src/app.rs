//! Root component and wasm bootstrap.
//!
//! # Design
//! - The core context is built and initialised once, before the first render.
//! - Signal subscriptions feed `use_state` handles so toggles and language picks re-render.
//! - The root `lang` attribute follows the active language.

use std::rc::Rc;

use crate::browser::{BrowserDocument, BrowserStorage, NavigatorProbe, mirror_language};
use crate::components::home::Home;
use crate::components::language_selector::LanguageSelector;
use crate::components::theme_toggle::ThemeToggle;
use crate::labels::ShellLabels;
use crate::settings::appearance_config;
use vellum_core::{AppContext, Language, TranslationBundle};
use vellum_telemetry::{LoggingConfig, init_logging};
use yew::prelude::*;

#[function_component(VellumApp)]
pub(crate) fn vellum_app() -> Html {
    let context = use_memo(|_| build_context(), ());
    let language = use_state(|| context.locale().current());
    let mode = use_state(|| context.theme().current());

    {
        let context = Rc::clone(&context);
        let language = language.clone();
        let mode = mode.clone();
        use_effect_with_deps(
            move |_| {
                let language_sub = context.locale().subscribe(move |next| {
                    mirror_language(*next);
                    language.set(*next);
                });
                let mode_sub = context.theme().subscribe(move |next| mode.set(*next));
                move || {
                    language_sub.unsubscribe();
                    mode_sub.unsubscribe();
                }
            },
            (),
        );
    }

    let on_toggle = {
        let context = Rc::clone(&context);
        Callback::from(move |()| {
            context.theme().toggle();
        })
    };
    let on_select = {
        let context = Rc::clone(&context);
        Callback::from(move |next: Language| {
            context.locale().set_language(next);
        })
    };

    let labels = ShellLabels::new(TranslationBundle::shared(*language), *mode);
    let controls = html! {
        <>
            <LanguageSelector
                label={labels.language_select.clone()}
                options={labels.languages.clone()}
                on_select={on_select}
            />
            <ThemeToggle labels={labels.theme.clone()} on_toggle={on_toggle} />
        </>
    };

    html! {
        <div class="app-shell">
            <Home labels={labels} controls={controls} />
        </div>
    }
}

fn build_context() -> AppContext {
    let context = AppContext::new(
        appearance_config(),
        Rc::new(BrowserStorage),
        Rc::new(BrowserDocument),
        Rc::new(NavigatorProbe),
    );
    let initial = context.initialize();
    mirror_language(initial.language);
    context
}

/// Entrypoint for the wasm bundle.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let logging = LoggingConfig {
        build_sha: option_env!("VELLUM_BUILD_SHA").unwrap_or("dev"),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::warn!(format!("logging disabled: {err}"));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VellumApp>::with_root(root).render();
    } else {
        yew::Renderer::<VellumApp>::new().render();
    }
}
