//! Application configuration.
//!
//! Centralized configuration for the DocuScan frontend. The processing
//! endpoint is relative because the backend serves the built frontend
//! from the same origin.

/// Document processing endpoint.
pub const PROCESS_ENDPOINT: &str = "/process";

/// Application name.
pub const APP_NAME: &str = "DocuScan";

/// Filename label shown when no valid file is selected.
pub const NO_FILE_SELECTED: &str = "No file selected";

/// Alert shown when the selected file's MIME type is outside the allow-list.
pub const INVALID_TYPE_ALERT: &str = "Please upload a PDF, JPG, or PNG file";

/// Alert shown when the form is submitted with no file.
pub const NO_FILE_ALERT: &str = "Please select a file first";

/// Alert shown when the server rejected the upload without a usable message.
pub const PROCESSING_FAILED: &str = "Processing failed";

/// Alert shown when the request never completed.
pub const UPLOAD_FAILED: &str = "Upload failed";
