//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"DocuScan - Text Extraction"</h1>
            <p class="subtitle">
                "Upload a PDF or a photo of a document and get its text back. "
                "Recognition is powered by Google Cloud Vision."
            </p>
        </div>
    }
}
