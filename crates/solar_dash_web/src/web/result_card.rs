use leptos::prelude::*;

/// Titled card for the last successful prediction; renders nothing until a
/// result exists.
#[component]
pub(super) fn ResultCard(
    title: &'static str,
    #[prop(into)] result: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || result.get().is_some()>
            <div class="result-card">
                <h3 class="result-title">{title}</h3>
                <p class="result-value">{move || result.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
