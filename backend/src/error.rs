//! Error types for the DocuScan processing pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`OcrError`] - Google Cloud Vision client errors
//! - [`PdfError`] - PDF rasterisation errors
//! - [`ProcessError`] - Top-level pipeline errors
//! - [`ServerError`] - HTTP server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// OCR Client Errors
// =============================================================================

/// Errors from the Vision OCR client.
#[derive(Debug, Error)]
pub enum OcrError {
    /// Missing API key.
    #[error("Missing GOOGLE_VISION_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Vision API returned an error payload.
    #[error("Vision API error: {0}")]
    Api(String),

    /// Response body could not be parsed.
    #[error("Invalid Vision response: {0}")]
    InvalidResponse(String),

    /// No text detected in the submitted image.
    #[error("No text could be detected in the image")]
    NoText,
}

// =============================================================================
// PDF Errors
// =============================================================================

/// Errors during PDF page rasterisation.
#[derive(Debug, Error)]
pub enum PdfError {
    /// pdfium library could not be loaded.
    #[error("Failed to bind pdfium: {0}")]
    Bind(String),

    /// Document could not be opened.
    #[error("Invalid or corrupted PDF file: {0}")]
    Invalid(String),

    /// A page failed to render.
    #[error("Failed to render page {page}: {message}")]
    Render { page: usize, message: String },

    /// PNG encoding of a rendered page failed.
    #[error("Failed to encode page image: {0}")]
    Encode(#[from] image::ImageError),

    /// Document has no pages.
    #[error("PDF file has no pages")]
    Empty,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level processing errors.
///
/// This is the main error type returned by [`crate::process::process_upload`].
/// It wraps all lower-level errors and adds pipeline-specific variants.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// OCR client error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// PDF rasterisation error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Uploaded bytes are not a decodable image.
    #[error("Invalid or corrupted image file")]
    InvalidImage,

    /// Filename extension outside the allow-list.
    #[error("Invalid file type")]
    UnsupportedType,

    /// Uploaded file is empty.
    #[error("Uploaded file is empty")]
    EmptyFile,

    /// Nothing was extracted from any page.
    #[error("No text could be extracted from the file")]
    NoTextExtracted,

    /// IO error (local extraction via the CLI).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Processing error.
    #[error("Processing error: {0}")]
    Process(#[from] ProcessError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for OCR operations.
pub type OcrResult<T> = Result<T, OcrError>;

/// Result type for PDF operations.
pub type PdfResult<T> = Result<T, PdfError>;

/// Result type for pipeline operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // OcrError -> ProcessError
        let ocr_err = OcrError::NoText;
        let process_err: ProcessError = ocr_err.into();
        assert!(process_err.to_string().contains("No text"));

        // PdfError -> ProcessError
        let pdf_err = PdfError::Empty;
        let process_err: ProcessError = pdf_err.into();
        assert!(process_err.to_string().contains("no pages"));

        // ProcessError -> ServerError
        let server_err: ServerError = ProcessError::UnsupportedType.into();
        assert!(server_err.to_string().contains("Invalid file type"));
    }

    #[test]
    fn test_render_error_format() {
        let err = PdfError::Render {
            page: 3,
            message: "bitmap allocation failed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("page 3"));
        assert!(msg.contains("bitmap allocation failed"));
    }
}
