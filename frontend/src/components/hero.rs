//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload your resume (PDF, DOCX, Image) and get structured data instantly."
            </p>
        </div>
    }
}
