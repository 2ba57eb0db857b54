//! One form submission, from submit to alert.
//!
//! The upload future and the progress channel are polled on the same task,
//! so the form state is only ever touched from here.

use dropform_core::{Alert, FormEvent, FormState, ProgressState};
use tokio::sync::mpsc;

use crate::file::LocalFile;
use crate::upload::Uploader;

/// Submit the form and drive the upload it starts, if any.
///
/// `on_progress` is called after every progress update. Returns the alert
/// the form ends up showing.
pub async fn submit(
    form: &mut FormState<LocalFile>,
    uploader: &Uploader,
    mut on_progress: impl FnMut(ProgressState),
) -> Option<Alert> {
    let Some(job) = form.apply(FormEvent::Submit) else {
        return form.alert().cloned();
    };

    let attempt = job.attempt;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let upload = uploader.upload(&job, tx);
    tokio::pin!(upload);

    let result = loop {
        tokio::select! {
            biased;
            Some(progress) = rx.recv() => {
                form.apply(FormEvent::UploadProgress { attempt, progress });
                on_progress(form.progress());
            }
            result = &mut upload => break result,
        }
    };

    while let Ok(progress) = rx.try_recv() {
        form.apply(FormEvent::UploadProgress { attempt, progress });
        on_progress(form.progress());
    }

    form.apply(FormEvent::UploadFinished { attempt, result });
    form.alert().cloned()
}
