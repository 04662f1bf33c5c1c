//! Result renderer: what the page shows, and the export action.
//!
//! [`RenderFacets`] is a snapshot of the controller reduced to what the view
//! needs. Error and result are independent facets, so an error banner can
//! sit next to the empty-result placeholder.

use crate::config::EXPORT_FILENAME;
use crate::controller::UploadController;
use crate::error::ExportError;
use crate::services::FileDownloader;
use crate::types::{ExtractionResult, UploadFile};

/// Label of the submit button when idle.
pub const SUBMIT_LABEL: &str = "Extract Data";

/// Label of the submit button while a request is in flight.
pub const LOADING_LABEL: &str = "Parsing...";

/// Text of the empty-result placeholder.
pub const PLACEHOLDER_TEXT: &str = "Results will appear here";

/// Serialize a result the way it is displayed and exported (2-space indent).
pub fn pretty_json(result: &ExtractionResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// View model derived from an [`UploadController`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFacets {
    /// Name of the selected file.
    pub file_name: Option<String>,
    /// Banner text of the last failure.
    pub error: Option<String>,
    /// Pretty-printed result.
    pub result_json: Option<String>,
    /// A request is on the wire, even one whose outcome will be dropped.
    pub loading: bool,
    /// The submit control is enabled.
    pub can_submit: bool,
}

impl RenderFacets {
    pub fn from_controller<F: UploadFile>(controller: &UploadController<F>) -> Self {
        let result_json = controller.result().and_then(|result| match pretty_json(result) {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Cannot display result: {}", e);
                None
            }
        });

        Self {
            file_name: controller.file().map(|file| file.file_name()),
            error: controller.error_message(),
            result_json,
            loading: controller.has_outstanding_request(),
            can_submit: controller.can_submit(),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_result(&self) -> bool {
        self.result_json.is_some()
    }

    pub fn shows_placeholder(&self) -> bool {
        !self.has_result()
    }

    pub fn can_export(&self) -> bool {
        self.has_result()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

/// Export the stored result as `resume_parsed.json`.
///
/// Returns `Ok(false)` without touching the downloader when there is nothing
/// to export. Never changes controller state.
pub fn export_result<D: FileDownloader>(
    result: Option<&ExtractionResult>,
    downloader: &D,
) -> Result<bool, ExportError> {
    let Some(result) = result else {
        return Ok(false);
    };
    let content = pretty_json(result)?;
    downloader.download(EXPORT_FILENAME, &content)?;
    Ok(true)
}
