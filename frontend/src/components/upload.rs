//! Upload form component.
//!
//! Holds the shared [`FormState`] in a signal, turns DOM events into
//! [`FormEvent`]s and runs the upload jobs the form hands back.

use dropform_core::{ClientConfig, FormEvent, FormState, UploadJob};
use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::components::{AlertBox, ProgressBar};
use crate::services::upload_file;
use crate::SERVER_URL;

/// Form state with browser file handles.
pub type WebForm = FormState<File>;

#[component]
pub fn UploadForm() -> impl IntoView {
    let (form, set_form) = create_signal(WebForm::new(ClientConfig::new(SERVER_URL)));

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        dispatch(set_form, FormEvent::FileSelected(file));
    };

    let on_email_input = move |ev: Event| {
        dispatch(set_form, FormEvent::EmailChanged(event_target_value(&ev)));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(set_form, FormEvent::Submit);
    };

    let is_uploading = move || form.with(|f| f.is_uploading());

    view! {
        <form class="upload-form" on:submit=on_submit>
            {move || form.with(|f| f.alert().cloned()).map(|alert| view! { <AlertBox alert=alert/> })}

            <input
                type="file"
                placeholder="Select a file to upload"
                on:change=on_file_change
            />
            <input
                type="text"
                placeholder="Enter a valid email address"
                on:input=on_email_input
            />
            <p class="hint">
                "We are going to send you a special link to download a file."
                <br/>
                "That is the only way to download the file."
            </p>
            <button type="submit" disabled=is_uploading>
                {move || if is_uploading() { "Uploading..." } else { "Upload" }}
            </button>
        </form>

        <Show
            when=move || form.with(|f| f.progress().is_active)
            fallback=|| view! { }
        >
            <ProgressBar percent=Signal::derive(move || form.with(|f| f.progress().percent))/>
        </Show>
    }
}

/// Apply an event and start the upload it produces, if any.
pub fn dispatch(set_form: WriteSignal<WebForm>, event: FormEvent<File>) {
    let mut job = None;
    set_form.update(|form| job = form.apply(event));

    if let Some(job) = job {
        spawn_local(run_upload(set_form, job));
    }
}

async fn run_upload(set_form: WriteSignal<WebForm>, job: UploadJob<File>) {
    let attempt = job.attempt;

    let result = upload_file(&job, move |progress| {
        set_form.update(|form| {
            form.apply(FormEvent::UploadProgress { attempt, progress });
        });
    })
    .await;

    dispatch(set_form, FormEvent::UploadFinished { attempt, result });
}
