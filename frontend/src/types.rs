//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the selected document handle
//! - **Request Types** - submit lifecycle and request tagging
//! - **Result Types** - the backend's extraction output

use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// A local file chosen by the user.
///
/// Implemented for [`web_sys::File`] in the browser. The controller only needs
/// to clone the handle and read its name; the bytes travel with the handle
/// straight into the multipart body.
pub trait UploadFile: Clone + 'static {
    /// File name as reported by the platform.
    fn file_name(&self) -> String;

    /// MIME type as reported by the platform (may be empty).
    fn content_type(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn content_type(&self) -> String {
        self.type_()
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Lifecycle of the most recent submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted since the last selection.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request produced a result.
    Succeeded,
    /// The last request failed.
    Failed,
}

impl RequestState {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            RequestState::Idle => "state-idle",
            RequestState::Loading => "state-loading",
            RequestState::Succeeded => "state-succeeded",
            RequestState::Failed => "state-failed",
        }
    }
}

/// Tag of one submit, increasing monotonically per controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handed out when a submit starts; returned with the outcome.
#[derive(Clone, Debug)]
pub struct SubmitTicket<F> {
    /// Tag the outcome must carry to be applied.
    pub id: RequestId,
    /// File to upload.
    pub file: F,
}

// =============================================================================
// Result Types
// =============================================================================

/// Whatever JSON the backend returned. No schema is enforced.
pub type ExtractionResult = serde_json::Value;
