//! Client-side file download.
//!
//! The export action never touches the DOM directly; it goes through a
//! [`FileDownloader`] so it can run outside a browser.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::EXPORT_MIME;
use crate::error::ExportError;

/// Capability to hand a text file to the user.
pub trait FileDownloader {
    fn download(&self, filename: &str, content: &str) -> Result<(), ExportError>;
}

/// Build a percent-encoded `data:` URL for a JSON document.
pub fn json_data_url(content: &str) -> String {
    format!("data:{},{}", EXPORT_MIME, urlencoding::encode(content))
}

/// Downloads through a temporary `<a download>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownloader;

impl FileDownloader for BrowserDownloader {
    fn download(&self, filename: &str, content: &str) -> Result<(), ExportError> {
        let document = gloo_utils::document();

        let anchor = document
            .create_element("a")
            .map_err(|e| ExportError::Browser(format!("Failed to create anchor: {:?}", e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ExportError::Browser("Element is not an anchor".to_string()))?;

        anchor.set_href(&json_data_url(content));
        anchor.set_download(filename);

        gloo_utils::body()
            .append_child(&anchor)
            .map_err(|e| ExportError::Browser(format!("Failed to attach anchor: {:?}", e)))?;
        anchor.click();
        anchor.remove();

        log::info!("💾 Downloaded {} ({} bytes)", filename, content.len());
        Ok(())
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_download_leaves_no_anchor_behind() {
        let before = gloo_utils::body().child_element_count();
        BrowserDownloader
            .download("resume_parsed.json", "{\n  \"a\": 1\n}")
            .expect("download failed");
        assert_eq!(gloo_utils::body().child_element_count(), before);
    }
}
