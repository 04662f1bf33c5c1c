//! End-to-end upload workflow with an in-memory backend and downloader.

use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use serde_json::{json, Value};

use resume_parser::{
    export_result, interpret_response, ExportError, ExtractionClient, ExtractionResult,
    FileDownloader, RenderFacets, RequestState, UploadController, UploadError, UploadFile,
};

#[derive(Clone, Debug, PartialEq)]
struct MemoryFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl MemoryFile {
    fn new(name: &str, content_type: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        }
    }
}

impl UploadFile for MemoryFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn content_type(&self) -> String {
        self.content_type.clone()
    }
}

/// What the fake backend does with the next request.
enum Reply {
    Http(u16, &'static str),
    ConnectionRefused,
}

struct FakeBackend {
    reply: Reply,
    calls: Cell<usize>,
    received: RefCell<Vec<MemoryFile>>,
}

impl FakeBackend {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            received: RefCell::new(Vec::new()),
        }
    }
}

impl ExtractionClient for FakeBackend {
    type File = MemoryFile;

    async fn extract(&self, file: &MemoryFile) -> Result<ExtractionResult, UploadError> {
        self.calls.set(self.calls.get() + 1);
        self.received.borrow_mut().push(file.clone());
        match self.reply {
            Reply::Http(status, body) => interpret_response(status, body),
            Reply::ConnectionRefused => {
                Err(UploadError::Transport("connection refused".to_string()))
            }
        }
    }
}

#[derive(Default)]
struct RecordingDownloader {
    downloads: RefCell<Vec<(String, String)>>,
}

impl FileDownloader for RecordingDownloader {
    fn download(&self, filename: &str, content: &str) -> Result<(), ExportError> {
        self.downloads
            .borrow_mut()
            .push((filename.to_string(), content.to_string()));
        Ok(())
    }
}

/// Drive one submit the way the upload component does.
fn submit(controller: &mut UploadController<MemoryFile>, backend: &FakeBackend) -> bool {
    let Some(ticket) = controller.begin_submit() else {
        return false;
    };
    let outcome = block_on(backend.extract(&ticket.file));
    controller.complete(ticket.id, outcome)
}

fn resume_pdf() -> MemoryFile {
    MemoryFile::new("resume.pdf", "application/pdf", b"%PDF-1.7 ...")
}

#[test]
fn test_skills_scenario_end_to_end() {
    let backend = FakeBackend::new(Reply::Http(200, r#"{"skills":["Go","SQL"]}"#));
    let downloader = RecordingDownloader::default();
    let mut controller = UploadController::new();

    controller.select_file(resume_pdf());
    assert!(submit(&mut controller, &backend));

    assert_eq!(controller.state(), RequestState::Succeeded);
    assert_eq!(backend.received.borrow()[0], resume_pdf());
    assert_eq!(backend.received.borrow()[0].bytes, b"%PDF-1.7 ...".to_vec());

    let facets = RenderFacets::from_controller(&controller);
    let shown = facets.result_json.clone().unwrap();
    assert!(shown.contains("\"Go\""));
    assert!(shown.contains("\"SQL\""));
    assert!(facets.can_export());
    assert!(!facets.has_error());

    assert!(export_result(controller.result(), &downloader).unwrap());
    let downloads = downloader.downloads.borrow();
    let expected = serde_json::to_string_pretty(&json!({"skills": ["Go", "SQL"]})).unwrap();
    assert_eq!(downloads.as_slice(), &[("resume_parsed.json".to_string(), expected)]);
    assert_eq!(
        downloads[0].1,
        "{\n  \"skills\": [\n    \"Go\",\n    \"SQL\"\n  ]\n}"
    );
}

#[test]
fn test_name_result_on_200() {
    let backend = FakeBackend::new(Reply::Http(200, r#"{"name":"Alice"}"#));
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    submit(&mut controller, &backend);

    assert_eq!(controller.state(), RequestState::Succeeded);
    assert_eq!(controller.result(), Some(&json!({"name": "Alice"})));
    assert!(controller.error_message().is_none());
}

#[test]
fn test_server_error_shows_generic_message() {
    let backend = FakeBackend::new(Reply::Http(500, "Internal Server Error"));
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    submit(&mut controller, &backend);

    assert_eq!(controller.state(), RequestState::Failed);
    assert_eq!(controller.error_message().as_deref(), Some("Failed to parse resume"));
    assert!(controller.result().is_none());

    let facets = RenderFacets::from_controller(&controller);
    assert!(facets.has_error());
    assert!(facets.shows_placeholder());
}

#[test]
fn test_connection_refused_shows_generic_message() {
    let backend = FakeBackend::new(Reply::ConnectionRefused);
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    submit(&mut controller, &backend);

    assert_eq!(controller.state(), RequestState::Failed);
    assert_eq!(controller.error_message().as_deref(), Some("Failed to parse resume"));
    assert!(!controller.is_loading());
}

#[test]
fn test_non_json_success_is_reported() {
    let backend = FakeBackend::new(Reply::Http(200, "<html>proxy page</html>"));
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    submit(&mut controller, &backend);

    assert_eq!(controller.state(), RequestState::Failed);
    assert!(matches!(controller.error(), Some(UploadError::MalformedResponse(_))));
    assert!(!controller.is_loading());
}

#[test]
fn test_no_request_without_file() {
    let backend = FakeBackend::new(Reply::Http(200, "{}"));
    let mut controller = UploadController::<MemoryFile>::new();

    assert!(!submit(&mut controller, &backend));
    assert_eq!(backend.calls.get(), 0);
    assert_eq!(controller.state(), RequestState::Idle);
}

#[test]
fn test_second_submit_while_loading_sends_nothing() {
    let backend = FakeBackend::new(Reply::Http(200, "{}"));
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());

    let first = controller.begin_submit().unwrap();
    assert!(controller.begin_submit().is_none());

    let outcome = block_on(backend.extract(&first.file));
    controller.complete(first.id, outcome);
    assert_eq!(backend.calls.get(), 1);
}

#[test]
fn test_new_selection_discards_late_response() {
    let backend = FakeBackend::new(Reply::Http(200, r#"{"name":"Old"}"#));
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    let ticket = controller.begin_submit().unwrap();

    let other = MemoryFile::new("cv.docx", "", b"PK\x03\x04");
    controller.select_file(other.clone());

    let outcome = block_on(backend.extract(&ticket.file));
    assert!(!controller.complete(ticket.id, outcome));
    assert_eq!(controller.state(), RequestState::Idle);
    assert_eq!(controller.file(), Some(&other));
    assert!(controller.result().is_none());
}

#[test]
fn test_unlisted_extension_is_still_uploaded() {
    let backend = FakeBackend::new(Reply::Http(200, "[]"));
    let mut controller = UploadController::new();
    controller.select_file(MemoryFile::new("resume.txt", "text/plain", b"Alice"));

    assert!(submit(&mut controller, &backend));
    assert_eq!(controller.result(), Some(&Value::Array(vec![])));
    assert_eq!(backend.received.borrow()[0].name, "resume.txt");
}

#[test]
fn test_export_after_failure_produces_nothing() {
    let backend = FakeBackend::new(Reply::Http(503, ""));
    let downloader = RecordingDownloader::default();
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    submit(&mut controller, &backend);

    assert!(!export_result(controller.result(), &downloader).unwrap());
    assert!(downloader.downloads.borrow().is_empty());
}

#[test]
fn test_reselect_during_request_sends_one_request_at_a_time() {
    let backend = FakeBackend::new(Reply::Http(200, r#"{"name":"Old"}"#));
    let mut controller = UploadController::new();
    controller.select_file(resume_pdf());
    let first = controller.begin_submit().unwrap();

    let other = MemoryFile::new("cv.docx", "", b"PK\x03\x04");
    controller.select_file(other.clone());
    assert!(!submit(&mut controller, &backend));
    assert_eq!(backend.calls.get(), 0);

    let outcome = block_on(backend.extract(&first.file));
    assert!(!controller.complete(first.id, outcome));
    assert!(controller.result().is_none());

    assert!(submit(&mut controller, &backend));
    assert_eq!(backend.calls.get(), 2);
    assert_eq!(backend.received.borrow()[1], other);
}
