use leptos::prelude::*;

#[component]
pub(super) fn Header(title: &'static str) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="brand">
                <span class="brand-icon" aria-hidden="true">"☀️"</span>
                " "
                {title}
            </h1>
        </header>
    }
}
