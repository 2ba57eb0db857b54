//! Multipart upload to the storage service.
//!
//! The file is sent under the `file` field with its file name, the email
//! under `email`. The file body is streamed in [`CHUNK_SIZE`] chunks and every
//! chunk handed to the HTTP client is reported as cumulative progress.

use std::io;

use dropform_core::{
    TransferProgress, UploadApiResponse, UploadError, UploadJob, UploadOutcome, UploadResult,
    EMAIL_FIELD, FILE_FIELD,
};
use futures::stream;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio::io::{AsyncReadExt, Take};
use tokio::sync::mpsc::UnboundedSender;

use crate::error::CliResult;
use crate::file::LocalFile;

/// Size of the chunks the file body is streamed in.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// HTTP client for the upload endpoint.
#[derive(Clone)]
pub struct Uploader {
    client: reqwest::Client,
}

impl Uploader {
    /// Create an uploader. No request timeout is set.
    pub fn new() -> CliResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("dropform/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Run one upload job.
    ///
    /// Progress is pushed to `progress` while the body is being sent. The
    /// response body is parsed whatever the HTTP status; anything that is
    /// not a valid service response is a transport error.
    pub async fn upload(
        &self,
        job: &UploadJob<LocalFile>,
        progress: UnboundedSender<TransferProgress>,
    ) -> UploadResult<UploadOutcome> {
        let form = multipart_form(&job.file, &job.email, progress).await?;

        log::info!(
            "📤 POST {} ({}, {} bytes)",
            job.url,
            job.file.name(),
            job.file.size()
        );

        let response = self
            .client
            .post(&job.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(format!("Failed to read response: {}", e)))?;

        log::debug!("Upload response ({}): {}", status, body);

        UploadApiResponse::parse(&body).map_err(|e| match e {
            UploadError::Transport(detail) => {
                UploadError::Transport(format!("{} (HTTP {})", detail, status))
            }
            other => other,
        })
    }
}

/// Build the multipart body for `file` and `email`.
///
/// The file is read lazily while the body is sent; at most one chunk is held
/// in memory. The length is taken when the upload starts and bytes appended
/// after that are not sent.
async fn multipart_form(
    file: &LocalFile,
    email: &str,
    progress: UnboundedSender<TransferProgress>,
) -> UploadResult<Form> {
    let read_error = |e: io::Error| {
        UploadError::Transport(format!("Failed to read {}: {}", file.path().display(), e))
    };

    let handle = tokio::fs::File::open(file.path()).await.map_err(read_error)?;
    let total = handle.metadata().await.map_err(read_error)?.len();

    let state = ChunkReader {
        reader: handle.take(total),
        loaded: 0,
        total,
        progress,
    };
    let body = stream::try_unfold(state, next_chunk);

    let part = Part::stream_with_length(Body::wrap_stream(body), total)
        .file_name(file.name().to_string());

    Ok(Form::new()
        .part(FILE_FIELD, part)
        .text(EMAIL_FIELD, email.to_string()))
}

/// Read position of a streamed file body.
struct ChunkReader {
    reader: Take<tokio::fs::File>,
    loaded: u64,
    total: u64,
    progress: UnboundedSender<TransferProgress>,
}

/// Read the next chunk and report cumulative progress. `None` at end of file.
async fn next_chunk(mut state: ChunkReader) -> io::Result<Option<(Vec<u8>, ChunkReader)>> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let n = state.reader.read(&mut buf).await?;
    if n == 0 {
        return Ok(None);
    }
    buf.truncate(n);

    state.loaded += n as u64;
    // Receiver may already be gone once the response is in.
    let _ = state.progress.send(TransferProgress {
        loaded: state.loaded,
        total: Some(state.total),
    });

    Ok(Some((buf, state)))
}
