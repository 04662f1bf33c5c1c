//! Resume upload component.
//!
//! Handles file selection and the submit button. The request runs in a
//! spawned task and reports back to the shared controller.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{ExtractionClient, HttpExtractionClient};
use crate::{is_advisory_match, RenderFacets, RequestState, UploadController, ACCEPT_ATTRIBUTE};

#[component]
pub fn UploadSection(controller: RwSignal<UploadController<File>>) -> impl IntoView {
    let facets = create_memo(move |_| controller.with(|c| RenderFacets::from_controller(c)));

    // Only the first file counts; the input is single-select.
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let name = file.name();
        if !is_advisory_match(&name) {
            log::warn!("⚠️ {} is not a PDF, Word document or image; sending it anyway", name);
        }
        log::info!("📄 Selected {} ({} bytes)", name, file.size());

        controller.update(|c| c.select_file(file));
    };

    let on_submit = move |_| {
        let Some(ticket) = controller.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        log::info!("🚀 Submitting {} as request {}", ticket.file.name(), ticket.id);

        spawn_local(async move {
            let client = HttpExtractionClient::default();
            let outcome = client.extract(&ticket.file).await;

            // Nothing subscribes to an outcome nobody is waiting for.
            if !controller.with_untracked(|c| c.awaits(ticket.id)) {
                log::debug!("Request {} settled after it was released", ticket.id);
                return;
            }
            let applied = controller
                .try_update(|c| c.complete(ticket.id, outcome))
                .unwrap_or(false);
            if applied && controller.with_untracked(|c| c.state() == RequestState::Succeeded) {
                log::info!("✅ Request {} parsed", ticket.id);
            }
        });
    };

    view! {
        <div class=move || format!("upload-section {}", controller.with(|c| c.state().css_class()))>
            <h2 class="section-title">"📤 Upload Resume"</h2>

            <label class="upload-zone" for="fileInput">
                <input
                    type="file"
                    id="fileInput"
                    class="upload-input"
                    accept=ACCEPT_ATTRIBUTE
                    on:change=on_file_change
                />
                <div class="upload-icon">"📄"</div>
                {move || match facets.with(|f| f.file_name.clone()) {
                    Some(name) => view! {
                        <div class="upload-selected">"✅ " {name}</div>
                    }.into_view(),
                    None => view! {
                        <div class="upload-text">
                            <span class="upload-cta">"Click to upload"</span>
                            " or drag and drop"
                            <br/>
                            <span class="upload-hint">"PDF, DOCX, Images"</span>
                        </div>
                    }.into_view(),
                }}
            </label>

            <button
                class="btn btn-primary submit-button"
                class:loading=move || facets.with(|f| f.loading)
                disabled=move || !facets.with(|f| f.can_submit)
                on:click=on_submit
            >
                {move || facets.with(|f| f.submit_label())}
            </button>

            <Show
                when=move || facets.with(|f| f.has_error())
                fallback=|| view! { }
            >
                <div class="error-message">
                    "⚠️ " {move || facets.with(|f| f.error.clone().unwrap_or_default())}
                </div>
            </Show>
        </div>
    }
}
