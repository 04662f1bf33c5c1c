//! Error types for the upload and export workflow.
//!
//! - [`UploadError`] - a submit that did not produce an extraction result
//! - [`ExportError`] - the export download could not be produced
//!
//! The `Display` text of an [`UploadError`] is what the error banner shows,
//! so transport and status failures deliberately share one generic message.
//! The detail each variant carries is only written to the console log.

use thiserror::Error;

/// Message shown for every transport or HTTP status failure.
pub const GENERIC_FAILURE: &str = "Failed to parse resume";

/// Message shown when a successful response does not hold JSON.
pub const MALFORMED_RESPONSE: &str = "Received an invalid response from the server";

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors from a single extraction request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The request never produced a response (connection refused, DNS, CORS...).
    #[error("{}", GENERIC_FAILURE)]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{}", GENERIC_FAILURE)]
    Status(u16),

    /// The backend answered 2xx but the body is not JSON.
    #[error("{}", MALFORMED_RESPONSE)]
    MalformedResponse(String),
}

impl UploadError {
    /// Diagnostic detail for the console log.
    pub fn detail(&self) -> String {
        match self {
            UploadError::Transport(cause) => format!("transport failure: {}", cause),
            UploadError::Status(status) => format!("backend returned HTTP {}", status),
            UploadError::MalformedResponse(cause) => format!("response is not JSON: {}", cause),
        }
    }
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while exporting the stored result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The result could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Serialize(String),

    /// The browser refused to create or click the download link.
    #[error("Browser download failed: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialize(err.to_string())
    }
}
