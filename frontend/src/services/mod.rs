//! Browser-facing services.
//!
//! # Services
//!
//! - [`extract`] - resume upload to the extraction backend
//! - [`download`] - client-side file download for the export action

pub mod extract;
pub mod download;

pub use extract::*;
pub use download::*;
