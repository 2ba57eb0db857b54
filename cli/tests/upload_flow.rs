//! End-to-end submissions against a mock upload service.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use dropform::{session, LocalFile, Uploader, CHUNK_SIZE};
use dropform_core::{
    ClientConfig, FormEvent, FormState, ProgressState, GENERIC_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
use serde_json::json;

/// One multipart part as received by the service.
#[derive(Debug, Clone)]
struct ReceivedPart {
    name: String,
    file_name: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone)]
struct MockService {
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
    status: StatusCode,
    body: String,
}

impl MockService {
    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle_upload(
    State(service): State<MockService>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let data = field.bytes().await.unwrap().to_vec();
        parts.push(ReceivedPart {
            name,
            file_name,
            data,
        });
    }
    service.requests.lock().unwrap().push(parts);

    (
        service.status,
        [(header::CONTENT_TYPE, "application/json")],
        service.body.clone(),
    )
}

async fn spawn_service(status: StatusCode, body: impl Into<String>) -> (MockService, String) {
    let service = MockService {
        requests: Arc::new(Mutex::new(Vec::new())),
        status,
        body: body.into(),
    };

    let app = Router::new()
        .route("/api/upload", post(handle_upload))
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .with_state(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (service, format!("http://{}", addr))
}

fn write_file(dir: &Path, name: &str, len: usize) -> LocalFile {
    let path = dir.join(name);
    let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, data).unwrap();
    LocalFile::open(path).unwrap()
}

fn form_for(server: &str, file: Option<LocalFile>, email: &str) -> FormState<LocalFile> {
    let mut form = FormState::new(ClientConfig::new(server));
    form.apply(FormEvent::FileSelected(file));
    form.apply(FormEvent::EmailChanged(email.to_string()));
    form
}

fn success_body() -> String {
    json!({ "success": true }).to_string()
}

#[tokio::test]
async fn test_missing_file_sends_nothing() {
    let (service, url) = spawn_service(StatusCode::OK, success_body()).await;
    let uploader = Uploader::new().unwrap();

    let mut form = form_for(&url, None, "a@b.com");
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert!(alert.is_destructive());
    assert_eq!(alert.message, "Please select a file to upload!");
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_invalid_email_sends_nothing() {
    let (service, url) = spawn_service(StatusCode::OK, success_body()).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    for email in ["", "no-at-sign"] {
        let file = write_file(dir.path(), "notes.txt", 16);
        let mut form = form_for(&url, Some(file), email);
        let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

        assert!(alert.is_destructive());
        assert_eq!(alert.message, "Please enter a valid email address!");
    }
    assert_eq!(service.request_count(), 0);
}

#[tokio::test]
async fn test_successful_upload_of_report() {
    let (service, url) = spawn_service(StatusCode::OK, success_body()).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "report.pdf", 10 * 1024 * 1024);

    let mut form = form_for(&url, Some(file.clone()), "a@b.com");
    let mut seen: Vec<ProgressState> = Vec::new();
    let alert = session::submit(&mut form, &uploader, |p| seen.push(p))
        .await
        .unwrap();

    assert!(!alert.is_destructive());
    assert_eq!(alert.message, SUCCESS_MESSAGE);
    assert!(!form.is_uploading());

    // Progress only moves forward and ends complete.
    assert!(!seen.is_empty());
    assert!(seen.windows(2).all(|w| w[0].percent <= w[1].percent));
    assert!(seen.iter().all(|p| p.percent <= 100 && p.is_active));
    assert_eq!(seen.last().unwrap().percent, 100);

    let requests = service.requests();
    assert_eq!(requests.len(), 1);

    let parts = &requests[0];
    let file_part = parts.iter().find(|p| p.name == "file").unwrap();
    assert_eq!(file_part.file_name.as_deref(), Some("report.pdf"));
    assert_eq!(file_part.data, std::fs::read(file.path()).unwrap());

    let email_part = parts.iter().find(|p| p.name == "email").unwrap();
    assert_eq!(email_part.data, b"a@b.com");
}

#[tokio::test]
async fn test_file_is_streamed_chunk_by_chunk() {
    let (service, url) = spawn_service(StatusCode::OK, success_body()).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    // Several full chunks plus a partial one.
    let len = CHUNK_SIZE * 7 + 123;
    let file = write_file(dir.path(), "archive.tar", len);

    let mut form = form_for(&url, Some(file.clone()), "a@b.com");
    let mut updates = 0usize;
    let alert = session::submit(&mut form, &uploader, |_| updates += 1)
        .await
        .unwrap();

    assert_eq!(alert.message, SUCCESS_MESSAGE);
    assert!(updates >= len.div_ceil(CHUNK_SIZE));

    let requests = service.requests();
    let file_part = requests[0].iter().find(|p| p.name == "file").unwrap();
    assert_eq!(file_part.data.len(), len);
    assert_eq!(file_part.data, std::fs::read(file.path()).unwrap());
}

#[tokio::test]
async fn test_empty_file_uploads() {
    let (service, url) = spawn_service(StatusCode::OK, success_body()).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "empty.txt", 0);

    let mut form = form_for(&url, Some(file), "a@b.com");
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert_eq!(alert.message, SUCCESS_MESSAGE);
    let requests = service.requests();
    let file_part = requests[0].iter().find(|p| p.name == "file").unwrap();
    assert!(file_part.data.is_empty());
}

#[tokio::test]
async fn test_service_failure_message_is_shown_verbatim() {
    let body = json!({ "success": false, "message": "quota exceeded" }).to_string();
    let (service, url) = spawn_service(StatusCode::OK, body).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let file = write_file(dir.path(), "big.iso", 1024);
    let mut form = form_for(&url, Some(file), "a@b.com");
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert!(alert.is_destructive());
    assert_eq!(alert.message, "quota exceeded");
    assert_eq!(service.request_count(), 1);
}

#[tokio::test]
async fn test_failure_body_on_error_status_is_still_parsed() {
    let body = json!({ "success": false, "message": "file too large" }).to_string();
    let (_service, url) = spawn_service(StatusCode::PAYLOAD_TOO_LARGE, body).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let file = write_file(dir.path(), "big.iso", 1024);
    let mut form = form_for(&url, Some(file), "a@b.com");
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert_eq!(alert.message, "file too large");
}

#[tokio::test]
async fn test_malformed_response_shows_generic_error() {
    let (service, url) = spawn_service(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let file = write_file(dir.path(), "photo.jpg", 2048);
    let mut form = form_for(&url, Some(file), "a@b.com");
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert!(alert.is_destructive());
    assert_eq!(alert.message, GENERIC_ERROR_MESSAGE);
    assert_eq!(service.request_count(), 1);
    assert!(!form.is_uploading());
}

#[tokio::test]
async fn test_unreachable_server_rearms_form() {
    // Bind then drop to get a port nobody listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "notes.txt", 32);

    let mut form = form_for(&format!("http://{}", addr), Some(file), "a@b.com");
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert!(alert.is_destructive());
    assert_eq!(alert.message, GENERIC_ERROR_MESSAGE);
    assert!(!form.is_uploading());
    assert!(!form.progress().is_active);

    // Still usable: a second submit starts a new attempt.
    let alert = session::submit(&mut form, &uploader, |_| {}).await.unwrap();
    assert_eq!(alert.message, GENERIC_ERROR_MESSAGE);
    assert_eq!(form.attempt(), 2);
}

#[tokio::test]
async fn test_resubmit_after_success_uploads_again() {
    let (service, url) = spawn_service(StatusCode::OK, success_body()).await;
    let uploader = Uploader::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.bin", 100);

    let mut form = form_for(&url, Some(file), "a@b.com");
    session::submit(&mut form, &uploader, |_| {}).await.unwrap();
    session::submit(&mut form, &uploader, |_| {}).await.unwrap();

    assert_eq!(service.request_count(), 2);
}
