//! HTTP service for submitting the upload form to the backend.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use crate::config::{PROCESSING_FAILED, PROCESS_ENDPOINT, UPLOAD_FAILED};

/// Failure payload returned by the backend with a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}

/// Submit the upload form to `/process`.
///
/// A single attempt, no retry and no timeout. On success the body is the
/// full results page that replaces the current document; on failure the
/// returned string is the message to surface to the user.
pub async fn submit_form(form_data: FormData) -> Result<String, String> {
    let request = Request::post(PROCESS_ENDPOINT)
        .body(form_data)
        .map_err(|_| UPLOAD_FAILED.to_string())?;

    let response = request
        .send()
        .await
        .map_err(|_| UPLOAD_FAILED.to_string())?;

    if response.ok() {
        response
            .text()
            .await
            .map_err(|_| UPLOAD_FAILED.to_string())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(server_error_message(&body))
    }
}

/// Map a non-2xx response body to the message shown to the user.
///
/// The backend answers failures with a JSON payload carrying an `error`
/// field; anything else falls back to the generic message.
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.error)
        .unwrap_or_else(|| PROCESSING_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_is_surfaced() {
        assert_eq!(server_error_message(r#"{"error":"bad file"}"#), "bad file");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{"requestId":"123e4567-e89b-12d3-a456-426614174000","status":"error","error":"Invalid file type"}"#;
        assert_eq!(server_error_message(body), "Invalid file type");
    }

    #[test]
    fn test_missing_error_field_falls_back() {
        assert_eq!(server_error_message(r#"{"status":"error"}"#), PROCESSING_FAILED);
        assert_eq!(server_error_message(r#"{"error":null}"#), PROCESSING_FAILED);
    }

    #[test]
    fn test_unparsable_body_falls_back() {
        assert_eq!(server_error_message(""), PROCESSING_FAILED);
        assert_eq!(server_error_message("<html>502</html>"), PROCESSING_FAILED);
    }
}
