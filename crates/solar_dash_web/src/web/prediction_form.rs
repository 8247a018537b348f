use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use solar_dash::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::notify;
use super::result_card::ResultCard;

#[component]
pub(super) fn PredictionFormCard(
    spec: FormSpec,
    client: StoredValue<PredictionClient>,
) -> impl IntoView {
    let kind = spec.kind;
    let features = spec.features;
    let form = RwSignal::new(PredictionForm::new(spec));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // The disabled button already blocks this; a second submit through
        // the keyboard is dropped here.
        let request = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                tracing::debug!(form = kind.label(), error = %e, "submit ignored");
                return;
            }
            None => return,
        };

        let client = client.get_value();
        spawn_local(async move {
            let response = client.predict(&request.endpoint, &request.payload).await;
            if let Err(err) = &response {
                notify::console_error(&err.to_string());
            }
            let notice = form
                .try_update(|f| {
                    let outcome = f.finish(response);
                    f.notice_for(&outcome)
                })
                .flatten();
            if let Some(notice) = notice {
                notify::alert(notice);
            }
        });
    };

    let result = Signal::derive(move || form.with(|f| f.result().map(str::to_string)));

    // Inputs are left uncontrolled: the browser owns the text (partial numbers
    // like "1." included) and every keystroke is mirrored into the form model.
    view! {
        <section class=format!("form-card {}", kind.accent())>
            <h2 class="form-heading">{kind.heading()}</h2>

            <form class="feature-grid" on:submit=on_submit>
                {features
                    .names()
                    .iter()
                    .map(|&name| {
                        view! {
                            <input
                                class="feature-input"
                                type="number"
                                step="any"
                                name=name
                                placeholder=name
                                aria-label=name
                                required=true
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    form.update(|f| {
                                        if let Err(e) = f.edit(name, text) {
                                            tracing::warn!(error = %e, "edit rejected");
                                        }
                                    });
                                }
                            />
                        }
                    })
                    .collect_view()}

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || form.with(|f| f.submit_disabled())
                >
                    {move || form.with(|f| f.submit_label())}
                </button>
            </form>

            <ResultCard title=kind.result_title() result=result />
        </section>
    }
}
