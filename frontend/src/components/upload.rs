//! Document upload widget with drag & drop support.
//!
//! Handles file selection, MIME validation, and submission to the backend.
//! On success the server's response is a full page that replaces the
//! current document.

use leptos::*;
use web_sys::{DragEvent, Event, File, FormData, HtmlFormElement, SubmitEvent};

use crate::components::ProgressSection;
use crate::config::{INVALID_TYPE_ALERT, NO_FILE_ALERT, NO_FILE_SELECTED, UPLOAD_FAILED};
use crate::services::submit_form;
use crate::types::is_accepted_type;

#[component]
pub fn UploadSection() -> impl IntoView {
    let (file_label, set_file_label) = create_signal(NO_FILE_SELECTED.to_string());
    let (drag_over, set_drag_over) = create_signal(false);
    let (uploading, set_uploading) = create_signal(false);

    let input_ref = create_node_ref::<html::Input>();

    // Validation gate shared by the drop and change handlers. Always shows
    // the file's name first; an off-list type then clears the selection.
    let handle_selection = move |file: File| {
        set_file_label.set(file.name());

        if !is_accepted_type(&file.type_()) {
            alert(INVALID_TYPE_ALERT);
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
            set_file_label.set(NO_FILE_SELECTED.to_string());
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_drag_over.set(false);
    };

    // The dropped FileList is assigned to the input wholesale; only the
    // first file goes through validation.
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };

        if files.length() == 0 {
            return;
        }

        if let Some(input) = input_ref.get() {
            input.set_files(Some(&files));
        }

        if let Some(file) = files.get(0) {
            handle_selection(file);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_selection(file);
        }
    };

    // Click anywhere in the drop zone to open the file picker
    let trigger_file_input = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let has_file = input_ref
            .get()
            .and_then(|input| input.files())
            .map(|files| files.length() > 0)
            .unwrap_or(false);

        if !has_file {
            alert(NO_FILE_ALERT);
            return;
        }

        // All current form fields travel in the multipart payload
        let form: HtmlFormElement = event_target(&ev);
        let Ok(form_data) = FormData::new_with_form(&form) else {
            alert(UPLOAD_FAILED);
            return;
        };

        set_uploading.set(true);

        spawn_local(async move {
            match submit_form(form_data).await {
                Ok(page) => {
                    log::info!("✅ Processing complete, rendering results");
                    replace_document(&page);
                }
                Err(message) => {
                    log::error!("❌ Upload failed: {}", message);
                    alert(&message);
                }
            }

            // Hidden in every outcome
            set_uploading.set(false);
        });
    };

    view! {
        <form id="upload-form" on:submit=on_submit>
            <div
                id="drop-zone"
                class="drop-zone"
                class=("drag-over", move || drag_over.get())
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
                on:click=trigger_file_input
            >
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">"Drag and drop your document here"</div>
                <div class="upload-hint">"or click to select a file"</div>
                <div class="upload-hint">"PDF, JPG and PNG are accepted"</div>

                <input
                    type="file"
                    id="file-input"
                    name="file"
                    accept=".pdf,.jpg,.jpeg,.png"
                    style="display:none"
                    node_ref=input_ref
                    on:change=on_file_change
                />
            </div>

            <div id="file-name" class="file-name">{move || file_label.get()}</div>

            <ProgressSection uploading=uploading/>

            <button type="submit" class="upload-button">"Extract Text"</button>
        </form>
    }
}

/// Blocking modal alert.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Replace the entire document content with the server's rendered page.
fn replace_document(html: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        root.set_inner_html(html);
    }
}
