use leptos::*;

/// Indeterminate progress indicator, revealed while an upload is in flight.
#[component]
pub fn ProgressSection(uploading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div
            id="progress-container"
            class="progress-container"
            class=("d-none", move || !uploading.get())
        >
            <div id="progress-bar" class="progress-bar">
                <div class="progress-fill"></div>
            </div>
            <div class="progress-text">"Processing document..."</div>
        </div>
    }
}
