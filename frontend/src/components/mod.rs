//! UI Components for the resume parser page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`UploadSection`] - File picker, submit button and error banner
//! - [`ResultSection`] - Extracted JSON with export button

mod hero;
mod upload;
mod result;

pub use hero::*;
pub use upload::*;
pub use result::*;
