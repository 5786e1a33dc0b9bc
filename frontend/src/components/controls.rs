//! Pieces shared by the upload forms: the submit row, the source type
//! select, and the glue that runs a submission from a form.

use leptos::*;
use web_sys::File;

use crate::services::{run_submission, HttpTransport, Settled, UploadForm};
use crate::state::{BusyState, NoticeState};
use crate::types::SourceType;

/// Submit button plus its status label.
///
/// The button is disabled while `busy` says a request is in flight.
#[component]
pub fn SubmitControl(
    busy: ReadSignal<BusyState>,
    button_id: &'static str,
    status_id: &'static str,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button
                type="submit"
                id=button_id
                class="btn btn-primary"
                disabled=move || busy.with(|b| b.submitting)
            >
                {label}
            </button>
            <span id=status_id class="status-text">
                {move || busy.with(|b| b.status.clone())}
            </span>
        </div>
    }
}

#[component]
pub fn SourceTypeSelect(select_id: &'static str, select_ref: NodeRef<html::Select>) -> impl IntoView {
    view! {
        <label for=select_id>"Tipo de fuente"</label>
        <select id=select_id name="source_type" node_ref=select_ref>
            {SourceType::ALL
                .into_iter()
                .map(|source| view! { <option value=source.as_str()>{source.label()}</option> })
                .collect_view()}
        </select>
    }
}

/// First file of a file input, if one is selected.
pub fn selected_file(input: NodeRef<html::Input>) -> Option<File> {
    input.get_untracked()?.files()?.get(0)
}

/// Current value of a text input, empty when the input is not mounted.
pub fn input_value(input: NodeRef<html::Input>) -> String {
    input.get_untracked().map(|i| i.value()).unwrap_or_default()
}

pub fn select_value(select: NodeRef<html::Select>) -> String {
    select.get_untracked().map(|s| s.value()).unwrap_or_default()
}

/// Resets the form's fields when called.
///
/// Must be taken inside the submit handler: once the page is left the
/// node ref is disposed and can no longer be read.
pub fn form_resetter(form_ref: NodeRef<html::Form>) -> impl FnOnce() + 'static {
    let form = form_ref.get_untracked();
    move || {
        if let Some(form) = form {
            form.reset();
        }
    }
}

/// Run a submission in the background and apply its settled state.
pub fn spawn_submission(
    form: UploadForm<File>,
    reset_form: impl FnOnce() + 'static,
    set_busy: WriteSignal<BusyState>,
    set_notice: WriteSignal<NoticeState>,
) {
    spawn_local(async move {
        let transport = HttpTransport::default();
        let settled = run_submission(form, &transport, set_busy).await;
        apply_settled(settled, reset_form, set_notice);
    });
}

/// Show the settled notice and clear the form on success.
///
/// The page may have been left while the request was in flight, so the
/// notice write tolerates a disposed signal.
pub fn apply_settled(settled: Settled, reset_form: impl FnOnce(), set_notice: WriteSignal<NoticeState>) {
    if settled.reset_form {
        reset_form();
    }
    if set_notice.try_set(settled.notice).is_some() {
        log::debug!("Upload settled after its page was left, notice dropped");
    }
}
