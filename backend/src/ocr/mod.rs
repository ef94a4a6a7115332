//! OCR module backed by the Google Cloud Vision API.
//!
//! Sends image bytes to the `images:annotate` REST endpoint with the
//! `TEXT_DETECTION` feature and returns the detected full text.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docuscan::ocr::VisionClient;
//!
//! let client = VisionClient::from_env()?;
//! let text = client.detect_text(&png_bytes).await?;
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;

use crate::error::{OcrError, OcrResult};

/// Default Vision API endpoint. Overridable for tests via [`VisionClient::with_endpoint`].
const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Default number of retries for transient failures.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Delay between retries in milliseconds.
const RETRY_DELAY_MS: u64 = 1000;

/// Shared HTTP client, reused across requests.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Google Cloud Vision client.
#[derive(Clone)]
pub struct VisionClient {
    api_key: String,
    endpoint: String,
}

/// `images:annotate` response structure.
#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default, rename = "textAnnotations")]
    text_annotations: Vec<TextAnnotation>,
    error: Option<StatusDetail>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    #[serde(default)]
    description: String,
}

/// Top-level API error response.
#[derive(Debug, Deserialize)]
struct VisionError {
    error: StatusDetail,
}

#[derive(Debug, Deserialize)]
struct StatusDetail {
    message: String,
}

impl VisionClient {
    /// Create a new client with an explicit API key.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Create a client from the `GOOGLE_VISION_API_KEY` environment variable.
    pub fn from_env() -> OcrResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key =
            env::var("GOOGLE_VISION_API_KEY").map_err(|_| OcrError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Override the API endpoint (used by tests against a mock server).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Detect the full text in an image (with retries).
    ///
    /// # Arguments
    /// * `image_bytes` - Raw image content (PNG or JPEG)
    ///
    /// # Returns
    /// The full detected text, or [`OcrError::NoText`] if the image contains none.
    pub async fn detect_text(&self, image_bytes: &[u8]) -> OcrResult<String> {
        let mut last_error = None;

        for attempt in 1..=DEFAULT_MAX_RETRIES {
            match self.try_detect_text(image_bytes).await {
                Ok(text) => return Ok(text),
                // Only network and API failures are worth retrying
                Err(e @ (OcrError::Http(_) | OcrError::Api(_))) => {
                    eprintln!("   ⚠️  Attempt {}/{} failed: {}", attempt, DEFAULT_MAX_RETRIES, e);
                    last_error = Some(e);

                    if attempt < DEFAULT_MAX_RETRIES {
                        eprintln!("   ↻ Retrying in {}ms...", RETRY_DELAY_MS);
                        tokio::time::sleep(tokio::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| OcrError::Api("Unknown error".to_string())))
    }

    /// Single annotation attempt.
    async fn try_detect_text(&self, image_bytes: &[u8]) -> OcrResult<String> {
        let body = self.call_api(image_bytes).await?;
        parse_text_from_response(&body)
    }

    /// Call the Vision API.
    async fn call_api(&self, image_bytes: &[u8]) -> OcrResult<String> {
        println!("   📡 Calling Google Vision API...");
        println!("      Image size: {} bytes", image_bytes.len());

        let request_body = serde_json::json!({
            "requests": [{
                "image": { "content": STANDARD.encode(image_bytes) },
                "features": [{ "type": "TEXT_DETECTION" }]
            }]
        });

        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let response = HTTP_CLIENT
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| OcrError::Http(e.to_string()))?;

        let status = response.status();
        println!("      Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| OcrError::Http(e.to_string()))?;

        if !status.is_success() {
            // Try to parse error
            if let Ok(error) = serde_json::from_str::<VisionError>(&body) {
                println!("      ✗ API error: {}", error.error.message);
                return Err(OcrError::Api(error.error.message));
            }
            println!("      ✗ HTTP error: {}", status);
            return Err(OcrError::Api(format!("HTTP {}: {}", status, body)));
        }

        println!("      ✓ Received {} bytes", body.len());
        Ok(body)
    }
}

/// Extract the full text from an `images:annotate` response body.
///
/// The first annotation carries the whole detected text; the rest are
/// per-word boxes we don't need.
fn parse_text_from_response(body: &str) -> OcrResult<String> {
    let response: AnnotateResponse =
        serde_json::from_str(body).map_err(|e| OcrError::InvalidResponse(e.to_string()))?;

    let image_response = response
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| OcrError::InvalidResponse("Empty response list".to_string()))?;

    if let Some(error) = image_response.error {
        return Err(OcrError::Api(error.message));
    }

    let text = image_response
        .text_annotations
        .into_iter()
        .next()
        .map(|a| a.description)
        .unwrap_or_default();

    if text.is_empty() {
        return Err(OcrError::NoText);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_text() {
        let body = r#"{
            "responses": [{
                "textAnnotations": [
                    { "description": "INVOICE\nTotal: 42.00", "locale": "en" },
                    { "description": "INVOICE" },
                    { "description": "Total:" }
                ]
            }]
        }"#;

        let text = parse_text_from_response(body).unwrap();
        assert_eq!(text, "INVOICE\nTotal: 42.00");
    }

    #[test]
    fn test_parse_no_annotations() {
        let body = r#"{ "responses": [{}] }"#;
        let err = parse_text_from_response(body).unwrap_err();
        assert!(matches!(err, OcrError::NoText));
    }

    #[test]
    fn test_parse_per_image_error() {
        let body = r#"{
            "responses": [{
                "error": { "code": 3, "message": "Bad image data." }
            }]
        }"#;

        let err = parse_text_from_response(body).unwrap_err();
        match err {
            OcrError::Api(msg) => assert_eq!(msg, "Bad image data."),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_garbage_body() {
        let err = parse_text_from_response("not json").unwrap_err();
        assert!(matches!(err, OcrError::InvalidResponse(_)));
    }

    #[test]
    fn test_missing_api_key() {
        std::env::remove_var("GOOGLE_VISION_API_KEY");
        assert!(matches!(
            VisionClient::from_env(),
            Err(OcrError::MissingApiKey)
        ));
    }
}
