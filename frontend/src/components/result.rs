//! Extracted data panel with the JSON export button.

use leptos::*;
use web_sys::File;

use crate::services::BrowserDownloader;
use crate::{export_result, RenderFacets, UploadController, PLACEHOLDER_TEXT};

#[component]
pub fn ResultSection(controller: RwSignal<UploadController<File>>) -> impl IntoView {
    let facets = create_memo(move |_| controller.with(|c| RenderFacets::from_controller(c)));

    let on_export = move |_| {
        match controller.with_untracked(|c| export_result(c.result(), &BrowserDownloader)) {
            Ok(true) => log::info!("💾 Result exported"),
            Ok(false) => log::debug!("Nothing to export"),
            Err(e) => log::error!("❌ Export failed: {}", e),
        }
    };

    view! {
        <div class="result-section">
            <div class="result-header">
                <h2 class="section-title">"🗂️ Extracted Data"</h2>
                <Show
                    when=move || facets.with(|f| f.can_export())
                    fallback=|| view! { }
                >
                    <button
                        class="btn btn-secondary export-button"
                        title="Download JSON"
                        on:click=on_export
                    >
                        "⬇ JSON"
                    </button>
                </Show>
            </div>

            <div class="result-body">
                {move || match facets.with(|f| f.result_json.clone()) {
                    Some(json) => view! {
                        <pre class="result-json">{json}</pre>
                    }.into_view(),
                    None => view! {
                        <div class="result-placeholder">
                            <code class="placeholder-icon">"{ }"</code>
                            <p>{PLACEHOLDER_TEXT}</p>
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
