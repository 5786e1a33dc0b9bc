//! Video upload form.

use leptos::ev::SubmitEvent;
use leptos::*;

use super::controls::{form_resetter, input_value, select_value, selected_file, spawn_submission};
use super::{SourceTypeSelect, SubmitControl};
use crate::services::{UploadForm, VideoForm};
use crate::state::{BusyState, NoticeState};

#[component]
pub fn VideoUploadForm(set_notice: WriteSignal<NoticeState>) -> impl IntoView {
    let (busy, set_busy) = create_signal(BusyState::idle());

    let form_ref = create_node_ref::<html::Form>();
    let file_ref = create_node_ref::<html::Input>();
    let source_ref = create_node_ref::<html::Select>();
    let provider_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = UploadForm::Video(VideoForm {
            file: selected_file(file_ref),
            source_type: select_value(source_ref),
            provider: input_value(provider_ref),
        });
        spawn_submission(form, form_resetter(form_ref), set_busy, set_notice);
    };

    view! {
        <form id="uploadVideoForm" class="upload-form" node_ref=form_ref on:submit=on_submit>
            <div class="field">
                <label for="video_file">"Vídeo"</label>
                <input type="file" id="video_file" name="video" accept="video/*" node_ref=file_ref/>
            </div>
            <div class="field">
                <SourceTypeSelect select_id="video_source_type" select_ref=source_ref/>
            </div>
            <div class="field">
                <label for="video_provider">"Proveedor"</label>
                <input
                    type="text"
                    id="video_provider"
                    name="provider"
                    placeholder="unknown"
                    node_ref=provider_ref
                />
            </div>
            <SubmitControl
                busy=busy
                button_id="videoSubmitBtn"
                status_id="videoStatusText"
                label="Subir vídeo"
            />
        </form>
    }
}
