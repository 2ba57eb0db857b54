//! Browser upload to the storage service.
//!
//! Uses `XMLHttpRequest` rather than `fetch` because only XHR exposes
//! upload progress (`xhr.upload.onprogress`).

use std::cell::RefCell;
use std::rc::Rc;

use dropform_core::{
    TransferProgress, UploadApiResponse, UploadError, UploadJob, UploadOutcome, UploadResult,
    EMAIL_FIELD, FILE_FIELD,
};
use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FormData, ProgressEvent, XmlHttpRequest};

/// How the request settled, before the body is looked at.
type Settled = Result<(), String>;

/// Upload `job.file` and `job.email` to `job.url`.
///
/// `on_progress` receives cumulative bytes as the browser sends the body.
pub async fn upload_file(
    job: &UploadJob<File>,
    on_progress: impl Fn(TransferProgress) + 'static,
) -> UploadResult<UploadOutcome> {
    let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;
    form_data
        .append_with_blob_and_filename(FILE_FIELD, &job.file, &job.file.name())
        .map_err(|e| js_error("Failed to append file", e))?;
    form_data
        .append_with_str(EMAIL_FIELD, &job.email)
        .map_err(|e| js_error("Failed to append email", e))?;

    let xhr = XmlHttpRequest::new().map_err(|e| js_error("Failed to create request", e))?;
    xhr.open("POST", &job.url)
        .map_err(|e| js_error("Failed to open request", e))?;

    let onprogress = Closure::wrap(Box::new(move |ev: ProgressEvent| {
        let total = if ev.length_computable() {
            Some(ev.total() as u64)
        } else {
            None
        };
        on_progress(TransferProgress {
            loaded: ev.loaded() as u64,
            total,
        });
    }) as Box<dyn FnMut(ProgressEvent)>);

    xhr.upload()
        .map_err(|e| js_error("Upload progress unavailable", e))?
        .set_onprogress(Some(onprogress.as_ref().unchecked_ref()));

    let (tx, rx) = oneshot::channel::<Settled>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = settle_handler(&tx, Ok(()));
    let onerror = settle_handler(&tx, Err("Network error".to_string()));
    let onabort = settle_handler(&tx, Err("Request aborted".to_string()));
    let ontimeout = settle_handler(&tx, Err("Request timed out".to_string()));

    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(onabort.as_ref().unchecked_ref()));
    xhr.set_ontimeout(Some(ontimeout.as_ref().unchecked_ref()));

    log::info!("📤 POST {} ({}, {} bytes)", job.url, job.file.name(), job.file.size());

    xhr.send_with_opt_form_data(Some(&form_data))
        .map_err(|e| js_error("Failed to send request", e))?;

    // Handlers must stay alive until the request settles.
    let settled = rx
        .await
        .map_err(|_| UploadError::Transport("Request dropped".to_string()))?;
    drop((onprogress, onload, onerror, onabort, ontimeout));
    settled.map_err(UploadError::Transport)?;

    let status = xhr.status().unwrap_or(0);
    let body = xhr.response_text().ok().flatten().unwrap_or_default();
    log::debug!("Upload response ({}): {}", status, body);

    UploadApiResponse::parse(&body).map_err(|e| match e {
        UploadError::Transport(detail) => {
            UploadError::Transport(format!("{} (HTTP {})", detail, status))
        }
        other => other,
    })
}

/// Event handler resolving the request with `outcome`. Only the first
/// handler to fire wins.
fn settle_handler(
    tx: &Rc<RefCell<Option<oneshot::Sender<Settled>>>>,
    outcome: Settled,
) -> Closure<dyn FnMut(Event)> {
    let tx = Rc::clone(tx);
    Closure::wrap(Box::new(move |_: Event| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(outcome.clone());
        }
    }) as Box<dyn FnMut(Event)>)
}

fn js_error(context: &str, err: JsValue) -> UploadError {
    UploadError::Transport(format!("{}: {:?}", context, err))
}
