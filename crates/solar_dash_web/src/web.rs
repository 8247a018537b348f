use leptos::prelude::*;
use solar_dash::prelude::*;

mod notify;
mod page_config;
mod prediction_form;
mod result_card;
mod shell;

use prediction_form::PredictionFormCard;
use shell::Header;

pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let config = page_config::load();
    let client = StoredValue::new(PredictionClient::new());

    view! {
        <div class="page">
            <Header title=PAGE_TITLE />
            <main class="forms">
                {FormKind::all()
                    .iter()
                    .map(|&kind| {
                        view! {
                            <PredictionFormCard spec=FormSpec::new(kind, &config) client=client />
                        }
                    })
                    .collect_view()}
            </main>
        </div>
    }
}
