//! # DocuScan - OCR document text extraction
//!
//! DocuScan extracts text from PDF and image documents (JPEG, PNG) using
//! the Google Cloud Vision API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Document   │────▶│  Gate/Pdf   │────▶│     OCR     │────▶│   Results   │
//! │ (pdf/image) │     │ (rasterise) │     │  (Vision)   │     │   (HTML)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docuscan::{process_file, ProcessOptions, VisionClient};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = VisionClient::from_env().unwrap();
//!     let outcome = process_file(&client, Path::new("scan.pdf"), ProcessOptions::default())
//!         .await
//!         .unwrap();
//!     println!("{}", outcome.text);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`ocr`] - Google Cloud Vision client
//! - [`pdf`] - PDF page rasterisation
//! - [`process`] - High-level pipeline
//! - [`pages`] - Server-rendered result pages
//! - [`api`] - HTTP API server

// Core modules
pub mod error;

// OCR
pub mod ocr;

// PDF rasterisation
pub mod pdf;

// Pipeline
pub mod process;

// Rendered pages
pub mod pages;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{OcrError, PdfError, ProcessError, ServerError};

// =============================================================================
// Re-exports - OCR client
// =============================================================================

pub use ocr::VisionClient;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use process::{
    allowed_file,
    extension,
    process_file,
    process_upload,
    ProcessOptions,
    ProcessOutcome,
    SourceKind,
    ALLOWED_EXTENSIONS,
};

// =============================================================================
// Re-exports - Pages
// =============================================================================

pub use pages::render_results_page;

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, error_status};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
