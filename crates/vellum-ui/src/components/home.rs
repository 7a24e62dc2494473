//! Home page: one heading, the feature list and the footer.

use crate::labels::ShellLabels;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HomeProps {
    pub labels: ShellLabels,
    /// Header controls (language selector, theme switch).
    pub controls: Html,
}

#[function_component(Home)]
pub(crate) fn home(props: &HomeProps) -> Html {
    let labels = &props.labels;
    html! {
        <>
            <header class="app-header">
                <nav class="app-header__controls">{props.controls.clone()}</nav>
            </header>
            <main class="app-main">
                <h1>{labels.title.clone()}</h1>
                <p class="app-main__subtitle">{labels.subtitle.clone()}</p>
                <p>{labels.welcome.clone()}</p>
                <section aria-labelledby="features-heading">
                    <h2 id="features-heading">{labels.features_title.clone()}</h2>
                    <ul>
                        {for labels.features.iter().map(|feature| html! { <li>{feature.clone()}</li> })}
                    </ul>
                </section>
            </main>
            <footer class="app-footer">
                <p>{labels.footer.clone()}</p>
            </footer>
        </>
    }
}
