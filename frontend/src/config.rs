//! Application configuration.
//!
//! Centralized configuration for the resume parser frontend.
//! Everything here is fixed at compile time; the page reads no environment
//! and persists nothing between sessions.

/// Resume extraction endpoint.
///
/// The backend parses the uploaded document and answers with JSON.
pub const EXTRACT_URL: &str = "http://localhost:8000/extract";

/// Multipart field name carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

/// Extensions suggested to the file picker (without the leading dot).
///
/// Advisory only: the browser lets the user override the filter and the
/// selection is never rejected because of its extension.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "jpg", "png", "jpeg"];

/// Value of the `accept` attribute on the file input.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.docx,.doc,.jpg,.png,.jpeg";

/// Name of the file produced by the export action.
pub const EXPORT_FILENAME: &str = "resume_parsed.json";

/// Media type prefix of the exported data URL.
pub const EXPORT_MIME: &str = "text/json;charset=utf-8";

/// Application name shown in the page title and hero.
pub const APP_NAME: &str = "Resume Parser AI";

/// Browser console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Whether `file_name` carries one of the advisory extensions.
///
/// Comparison is case-insensitive, so `CV.PDF` matches.
pub fn is_advisory_match(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute_lists_every_extension() {
        let listed: Vec<&str> = ACCEPT_ATTRIBUTE
            .split(',')
            .map(|ext| ext.trim_start_matches('.'))
            .collect();
        assert_eq!(listed.len(), ACCEPTED_EXTENSIONS.len());
        for ext in ACCEPTED_EXTENSIONS {
            assert!(listed.contains(ext), "missing {}", ext);
        }
    }

    #[test]
    fn test_advisory_match() {
        assert!(is_advisory_match("resume.pdf"));
        assert!(is_advisory_match("Resume.DOCX"));
        assert!(is_advisory_match("scan.photo.jpeg"));
        assert!(!is_advisory_match("notes.txt"));
        assert!(!is_advisory_match("README"));
        assert!(!is_advisory_match("pdf"));
    }
}
