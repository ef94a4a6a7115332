//! High-level document processing pipeline.
//!
//! Combines all steps: file-type gating, PDF rasterisation, and OCR.
//!
//! # Example
//!
//! ```rust,ignore
//! use docuscan::process::{process_file, ProcessOptions};
//! use docuscan::ocr::VisionClient;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VisionClient::from_env()?;
//!     let outcome = process_file(
//!         &client,
//!         Path::new("scan.pdf"),
//!         ProcessOptions::default(),
//!     ).await?;
//!
//!     println!("Extracted {} characters", outcome.text.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use crate::error::{ProcessError, ProcessResult};
use crate::ocr::VisionClient;
use crate::pdf;

/// Accepted filename extensions, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

/// Options for the processing pipeline.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Rasterisation resolution for PDF pages.
    pub dpi: f32,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            dpi: pdf::DEFAULT_DPI,
        }
    }
}

/// What kind of document was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Image,
}

/// Result of a complete processing run.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Original filename as uploaded.
    pub file_name: String,

    /// Document kind (PDF or single image).
    pub kind: SourceKind,

    /// Number of OCR'd pages (1 for images).
    pub page_count: usize,

    /// Full extracted text, pages joined with blank lines.
    pub text: String,
}

/// Check a filename against the extension allow-list.
///
/// Requires a dot; the extension is the part after the last dot,
/// compared case-insensitively.
pub fn allowed_file(filename: &str) -> bool {
    extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lowercased extension of `filename`, if it has one.
pub fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Process an uploaded document: gate by type, then extract its text.
pub async fn process_upload(
    client: &VisionClient,
    file_name: &str,
    bytes: &[u8],
    options: ProcessOptions,
) -> ProcessResult<ProcessOutcome> {
    if bytes.is_empty() {
        return Err(ProcessError::EmptyFile);
    }

    if !allowed_file(file_name) {
        return Err(ProcessError::UnsupportedType);
    }

    let is_pdf = extension(file_name).as_deref() == Some("pdf");

    let (text, page_count, kind) = if is_pdf {
        let (text, pages) = process_pdf(client, bytes, options.dpi).await?;
        (text, pages, SourceKind::Pdf)
    } else {
        let text = process_image(client, bytes).await?;
        (text, 1, SourceKind::Image)
    };

    if text.is_empty() {
        return Err(ProcessError::NoTextExtracted);
    }

    Ok(ProcessOutcome {
        file_name: file_name.to_string(),
        kind,
        page_count,
        text,
    })
}

/// Process a local file (CLI path).
pub async fn process_file(
    client: &VisionClient,
    path: &Path,
    options: ProcessOptions,
) -> ProcessResult<ProcessOutcome> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let bytes = tokio::fs::read(path).await?;

    process_upload(client, &file_name, &bytes, options).await
}

/// Rasterise a PDF and OCR each page.
///
/// Pages are joined with blank lines, in document order. Rendering happens
/// on the blocking pool (pdfium is not async-safe).
async fn process_pdf(
    client: &VisionClient,
    bytes: &[u8],
    dpi: f32,
) -> ProcessResult<(String, usize)> {
    let owned = bytes.to_vec();
    let pages = tokio::task::spawn_blocking(move || pdf::render_pages(&owned, dpi))
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))??;

    let page_count = pages.len();
    println!("   📑 Rendered {} page(s)", page_count);

    let mut texts = Vec::with_capacity(page_count);

    for (index, png) in pages.iter().enumerate() {
        println!("   🔍 OCR page {}/{}", index + 1, page_count);
        texts.push(client.detect_text(png).await?);
    }

    Ok((texts.join("\n\n"), page_count))
}

/// OCR a single image, rejecting bytes that don't decode as one.
async fn process_image(client: &VisionClient, bytes: &[u8]) -> ProcessResult<String> {
    // Decode check before spending an API call on garbage
    image::load_from_memory(bytes).map_err(|_| ProcessError::InvalidImage)?;

    Ok(client.detect_text(bytes).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(allowed_file("scan.pdf"));
        assert!(allowed_file("photo.png"));
        assert!(allowed_file("photo.jpg"));
        assert!(allowed_file("photo.jpeg"));
        assert!(allowed_file("PHOTO.JPG"));
        assert!(allowed_file("archive.backup.pdf"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!allowed_file("notes.txt"));
        assert!(!allowed_file("archive.gif"));
        assert!(!allowed_file("no_extension"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension("Scan.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension("photo").as_deref(), None);
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let client = VisionClient::new("test-key".into());
        let err = process_upload(&client, "scan.pdf", &[], ProcessOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::EmptyFile));
    }

    #[tokio::test]
    async fn test_unsupported_type_rejected() {
        let client = VisionClient::new("test-key".into());
        let err = process_upload(&client, "notes.txt", b"hello", ProcessOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::UnsupportedType));
    }

    #[tokio::test]
    async fn test_process_file_gates_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text").unwrap();

        let client = VisionClient::new("test-key".into());
        let err = process_file(&client, &path, ProcessOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::UnsupportedType));
    }

    #[tokio::test]
    async fn test_corrupted_image_rejected() {
        // Valid extension, garbage bytes: fails the decode gate before OCR
        let client = VisionClient::new("test-key".into());
        let err = process_upload(&client, "photo.png", b"not an image", ProcessOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::InvalidImage));
    }
}
