//! Image ZIP upload form.

use leptos::ev::SubmitEvent;
use leptos::*;

use super::controls::{form_resetter, input_value, select_value, selected_file, spawn_submission};
use super::{SourceTypeSelect, SubmitControl};
use crate::services::{UploadForm, ZipForm};
use crate::state::{BusyState, NoticeState};

#[component]
pub fn ZipUploadForm(set_notice: WriteSignal<NoticeState>) -> impl IntoView {
    let (busy, set_busy) = create_signal(BusyState::idle());

    let form_ref = create_node_ref::<html::Form>();
    let file_ref = create_node_ref::<html::Input>();
    let source_ref = create_node_ref::<html::Select>();
    let dataset_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = UploadForm::Zip(ZipForm {
            file: selected_file(file_ref),
            source_type: select_value(source_ref),
            dataset_name: input_value(dataset_ref),
        });
        spawn_submission(form, form_resetter(form_ref), set_busy, set_notice);
    };

    view! {
        <form id="uploadZipForm" class="upload-form" node_ref=form_ref on:submit=on_submit>
            <div class="field">
                <label for="zip_file">"Archivo ZIP"</label>
                <input type="file" id="zip_file" name="zipfile" accept=".zip" node_ref=file_ref/>
            </div>
            <div class="field">
                <SourceTypeSelect select_id="zip_source_type" select_ref=source_ref/>
            </div>
            <div class="field">
                <label for="dataset_name">"Nombre del dataset"</label>
                <input type="text" id="dataset_name" name="dataset_name" node_ref=dataset_ref/>
            </div>
            <SubmitControl
                busy=busy
                button_id="zipSubmitBtn"
                status_id="zipStatusText"
                label="Subir ZIP"
            />
        </form>
    }
}
