//! HTTP Server for the DocuScan API.
//!
//! Serves the built WASM frontend and the document-processing endpoint.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                                |
//! |--------|-------------|--------------------------------------------|
//! | GET    | `/health`   | Health check                               |
//! | POST   | `/process`  | Upload a document, get a results page back |
//! | GET    | `/*`        | Static frontend assets                     |

use axum::{
    extract::{Multipart, State},
    http::{header, Method, StatusCode},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::types::{error_response, error_status};
use crate::ocr::VisionClient;
use crate::process::{process_upload, ProcessOptions};

/// Directory holding the built frontend (trunk output).
const STATIC_DIR: &str = "frontend/dist";

/// Start the HTTP server
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let client = VisionClient::from_env()?;

    // CORS permissif pour le développement
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(health))
        .route("/process", post(process_document))
        .fallback_service(ServeDir::new(STATIC_DIR))
        .layer(cors)
        .with_state(client);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 DocuScan server running on http://localhost:{}", port);
    println!("   POST /process - Upload a PDF/JPG/PNG document");
    println!("   GET  /health  - Health check");
    println!("   GET  /        - Frontend ({})", STATIC_DIR);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "docuscan",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "process": "POST /process",
        }
    }))
}

/// Document processing endpoint.
///
/// Accepts a multipart form holding the document under the `file` field,
/// runs the OCR pipeline, and answers with a full results page. Failures
/// answer with a JSON payload the widget knows how to surface.
async fn process_document(
    State(client): State<VisionClient>,
    mut multipart: Multipart,
) -> Result<Html<String>, (StatusCode, Json<Value>)> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(error_response(&format!("Multipart error: {}", e))),
        )
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            file_name = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| {
                        (
                            StatusCode::BAD_REQUEST,
                            Json(error_response(&format!("Read error: {}", e))),
                        )
                    })?
                    .to_vec(),
            );
        }
    }

    let bytes = file_data.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(error_response("No file uploaded")),
        )
    })?;

    let file_name = match file_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(error_response("No file selected")),
            ))
        }
    };

    println!("\n{}", "=".repeat(70));
    println!("📄 NEW UPLOAD: {} ({} bytes)", file_name, bytes.len());
    println!("{}\n", "=".repeat(70));

    let outcome = process_upload(&client, &file_name, &bytes, ProcessOptions::default())
        .await
        .map_err(|e| {
            eprintln!("❌ Processing error: {}", e);
            (error_status(&e), Json(error_response(&e.to_string())))
        })?;

    println!("\n{}", "=".repeat(70));
    println!("📊 SUMMARY");
    println!("{}", "=".repeat(70));
    println!("   File:       {}", outcome.file_name);
    println!("   Pages:      {}", outcome.page_count);
    println!("   Characters: {}", outcome.text.len());
    println!("{}\n", "=".repeat(70));

    Ok(Html(crate::pages::render_results_page(&outcome)))
}
