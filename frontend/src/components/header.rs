use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <span class="badge">"OCR"</span>
            </div>
        </header>
    }
}
