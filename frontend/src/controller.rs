//! Upload controller: selection state and the submit lifecycle.
//!
//! The controller is a plain state container with no I/O. A submit is split
//! in two halves so the request itself can run on the browser's event loop:
//!
//! ```text
//! select_file ──▶ Idle ──begin_submit──▶ Loading ──complete──▶ Succeeded | Failed
//!      ▲                                                              │
//!      └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every submit gets a fresh [`RequestId`]. `complete` only applies an
//! outcome whose id is still current, so a response that arrives after the
//! user picked another file is dropped.
//!
//! Selecting a file does not cancel the request on the wire. Until that
//! orphaned request settles, `begin_submit` refuses to start another one:
//! at most one request is ever outstanding.

use crate::error::UploadError;
use crate::types::{ExtractionResult, RequestId, RequestState, SubmitTicket, UploadFile};

/// State owned by the upload page.
#[derive(Clone, Debug)]
pub struct UploadController<F> {
    file: Option<F>,
    state: RequestState,
    result: Option<ExtractionResult>,
    error: Option<UploadError>,
    /// Request whose outcome will be applied.
    current: Option<RequestId>,
    /// Request still on the wire, current or orphaned.
    outstanding: Option<RequestId>,
    next_id: u64,
}

impl<F> Default for UploadController<F> {
    fn default() -> Self {
        Self {
            file: None,
            state: RequestState::Idle,
            result: None,
            error: None,
            current: None,
            outstanding: None,
            next_id: 1,
        }
    }
}

impl<F: UploadFile> UploadController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected file and reset to Idle.
    ///
    /// Any result or error is discarded, and a request still in flight is
    /// orphaned: its outcome will be ignored by [`complete`](Self::complete).
    /// Submit stays disabled until the orphan settles.
    pub fn select_file(&mut self, file: F) {
        if let Some(stale) = self.current.take() {
            log::info!("Request {} superseded by a new selection", stale);
        }
        self.file = Some(file);
        self.state = RequestState::Idle;
        self.result = None;
        self.error = None;
    }

    /// Start a submit.
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// request, current or orphaned, is still outstanding.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket<F>> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;

        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.current = Some(id);
        self.outstanding = Some(id);
        self.state = RequestState::Loading;
        self.result = None;
        self.error = None;

        Some(SubmitTicket { id, file })
    }

    /// Apply the outcome of request `id`.
    ///
    /// Returns `false` when the request is no longer current; the outcome is
    /// then dropped and only the outstanding-request guard is released.
    pub fn complete(&mut self, id: RequestId, outcome: Result<ExtractionResult, UploadError>) -> bool {
        if self.outstanding == Some(id) {
            self.outstanding = None;
        }
        if self.current != Some(id) {
            log::warn!("Dropping stale response for request {}", id);
            return false;
        }
        self.current = None;

        match outcome {
            Ok(result) => {
                self.state = RequestState::Succeeded;
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                log::error!("Request {} failed: {}", id, err.detail());
                self.state = RequestState::Failed;
                self.result = None;
                self.error = Some(err);
            }
        }
        true
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_loading() && self.outstanding.is_none()
    }

    /// Whether a response for `id` would change anything.
    pub fn awaits(&self, id: RequestId) -> bool {
        self.outstanding == Some(id) || self.current == Some(id)
    }

    /// A request is on the wire, even if its outcome will be dropped.
    pub fn has_outstanding_request(&self) -> bool {
        self.outstanding.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    /// Banner text for the last failure.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Request whose outcome is currently awaited, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.current
    }
}
