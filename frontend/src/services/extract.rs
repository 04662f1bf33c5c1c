//! HTTP service posting the selected resume to the extraction backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{EXTRACT_URL, UPLOAD_FIELD};
use crate::error::UploadError;
use crate::types::{ExtractionResult, UploadFile};

/// Something that can turn an uploaded file into an extraction result.
///
/// One call is one request: no retries, no timeout.
#[allow(async_fn_in_trait)]
pub trait ExtractionClient {
    type File: UploadFile;

    async fn extract(&self, file: &Self::File) -> Result<ExtractionResult, UploadError>;
}

/// Browser client speaking multipart/form-data to the backend.
#[derive(Clone, Debug)]
pub struct HttpExtractionClient {
    endpoint: String,
}

impl HttpExtractionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpExtractionClient {
    fn default() -> Self {
        Self::new(EXTRACT_URL)
    }
}

impl ExtractionClient for HttpExtractionClient {
    type File = File;

    async fn extract(&self, file: &File) -> Result<ExtractionResult, UploadError> {
        let form_data =
            FormData::new().map_err(|e| UploadError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        // The browser fills in filename and content type from the File.
        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| UploadError::Transport(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?;

        log::info!("📤 POST {} ({}, {})", self.endpoint, file.file_name(), file.content_type());

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(UploadError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(format!("Failed to read body: {}", e)))?;

        interpret_response(response.status(), &body)
    }
}

/// Map a backend answer onto the submit outcome.
///
/// Any 2xx status with a JSON body is a result, taken verbatim. Other statuses
/// fail regardless of the body; a 2xx body that is not JSON is malformed.
pub fn interpret_response(status: u16, body: &str) -> Result<ExtractionResult, UploadError> {
    if !(200..300).contains(&status) {
        return Err(UploadError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| UploadError::MalformedResponse(e.to_string()))
}
