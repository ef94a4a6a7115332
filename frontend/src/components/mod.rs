//! UI Components for the DocuScan application.
//!
//! # Layout Components
//! - [`Header`] - Brand bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Document upload with drag & drop
//! - [`ProgressSection`] - In-flight upload indicator

mod footer;
mod header;
mod hero;
mod progress;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use progress::*;
pub use upload::*;
