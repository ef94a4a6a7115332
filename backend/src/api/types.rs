//! REST API types for frontend integration.
//!
//! The widget only contracts on the `error` string field of failure
//! payloads; `requestId` ties a payload back to the server logs.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ProcessError;

/// Create an error response payload.
pub fn error_response(error: &str) -> Value {
    json!({
        "requestId": Uuid::new_v4().to_string(),
        "status": "error",
        "error": error,
    })
}

/// HTTP status for a processing failure.
///
/// Client-caused failures (bad file, no text) map to 400; OCR backend
/// failures are the server's problem and map to 500.
pub fn error_status(error: &ProcessError) -> axum::http::StatusCode {
    use axum::http::StatusCode;
    use crate::error::OcrError;

    match error {
        ProcessError::Ocr(OcrError::Http(_))
        | ProcessError::Ocr(OcrError::Api(_))
        | ProcessError::Ocr(OcrError::InvalidResponse(_))
        | ProcessError::Ocr(OcrError::MissingApiKey) => StatusCode::INTERNAL_SERVER_ERROR,
        ProcessError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrError;
    use axum::http::StatusCode;

    #[test]
    fn test_error_response_shape() {
        let payload = error_response("Invalid file type");
        assert_eq!(payload["error"], "Invalid file type");
        assert_eq!(payload["status"], "error");
        assert!(payload["requestId"].as_str().is_some());
    }

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(
            error_status(&ProcessError::UnsupportedType),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&ProcessError::Ocr(OcrError::NoText)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_backend_errors_are_500() {
        assert_eq!(
            error_status(&ProcessError::Ocr(OcrError::Http("timeout".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
