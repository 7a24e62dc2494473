//! Light/dark switch.
//!
//! # Design
//! - Rendered as a `role="switch"` button; checked means dark mode.
//! - The caller owns the controller; the component only emits toggle requests.

use crate::labels::ThemeToggleLabels;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub labels: ThemeToggleLabels,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let labels = &props.labels;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let icon = if labels.checked { "☾" } else { "☀" };

    html! {
        <button
            type="button"
            role="switch"
            class="theme-toggle"
            aria-label={labels.toggle.clone()}
            aria-checked={labels.checked.to_string()}
            title={labels.state.clone()}
            onclick={onclick}
        >
            <span class="theme-toggle__icon" aria-hidden="true">{icon}</span>
            <span class="sr-only">{labels.state.clone()}</span>
        </button>
    }
}
