//! Language buttons in fixed `EN, PT, ES` order.
//!
//! # Design
//! - Each button is named by the language's own spelling and reports `aria-pressed`.
//! - Emit the selected language via callback; persistence happens in the caller.

use crate::labels::LanguageOption;
use vellum_core::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageSelectorProps {
    pub label: String,
    pub options: Vec<LanguageOption>,
    pub on_select: Callback<Language>,
}

#[function_component(LanguageSelector)]
pub(crate) fn language_selector(props: &LanguageSelectorProps) -> Html {
    html! {
        <div class="language-selector" role="group" aria-label={props.label.clone()}>
            {for props.options.iter().map(|option| {
                let next = option.language;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(next));
                html! {
                    <button
                        type="button"
                        class={classes!("language-selector__option", option.pressed.then_some("is-active"))}
                        lang={next.code()}
                        aria-label={option.label}
                        aria-pressed={option.pressed.to_string()}
                        onclick={onclick}
                    >
                        {option.badge}
                    </button>
                }
            })}
        </div>
    }
}
