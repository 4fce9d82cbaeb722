//! HTTP extraction service.
//!
//! `POST /extract` takes a multipart batch of images plus a `docType` code.
//! `GET /health` reports static capability flags.

use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use idscan_core::{
    BatchItem, BatchReport, BatchSummary, DocumentPipeline, DocumentType, FileOutcome,
    TextRecognizer,
};

/// Engine type shared by every request.
pub type SharedRecognizer = Box<dyn TextRecognizer + Send>;

/// State shared by all handlers.
pub struct AppState {
    /// Batches run one at a time; the engine is not assumed to be thread-safe.
    pipeline: Mutex<DocumentPipeline<SharedRecognizer>>,
    engine_name: String,
    default_doc_type: String,
}

impl AppState {
    pub fn new(recognizer: SharedRecognizer, default_doc_type: impl Into<String>) -> Self {
        let engine_name = recognizer.name().to_string();
        Self {
            pipeline: Mutex::new(DocumentPipeline::new(recognizer)),
            engine_name,
            default_doc_type: default_doc_type.into(),
        }
    }
}

#[derive(Serialize)]
struct ExtractResponse {
    success: bool,
    results: Vec<FileOutcome>,
    summary: BatchSummary,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FileOutcome>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    ocr_engine: &'static str,
    engine_name: String,
    document_types: Vec<&'static str>,
    fields: [&'static str; 3],
}

/// Build the service router.
pub fn router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/extract", post(extract))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: error.into(),
            details: None,
        }),
    )
        .into_response()
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ocr_engine: "available",
        engine_name: state.engine_name.clone(),
        document_types: DocumentType::ALL.iter().map(|t| t.as_str()).collect(),
        fields: ["name", "dateOfBirth", "gender"],
    })
}

async fn extract(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let mut images = Vec::new();
    let mut single_image = None;
    let mut doc_type_code = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Malformed multipart request: {e}");
                return error_response(StatusCode::BAD_REQUEST, format!("Invalid upload: {e}"));
            }
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "images" | "image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        tracing::warn!("Failed to read upload bytes: {e}");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            "Failed to read file data.",
                        );
                    }
                };
                let item = BatchItem::new(filename, bytes);
                if name == "images" {
                    images.push(item);
                } else {
                    // the first "image" field wins
                    single_image.get_or_insert(item);
                }
            }
            "docType" => {
                doc_type_code = field.text().await.ok();
            }
            _ => {}
        }
    }

    // "images" takes precedence over a lone "image" field
    let items: Vec<BatchItem> = if images.is_empty() {
        single_image.into_iter().collect()
    } else {
        images
    };

    let code = doc_type_code.unwrap_or_else(|| state.default_doc_type.clone());
    let document_type = DocumentType::from_code(&code);

    tracing::info!(
        files = items.len(),
        document_type = %document_type,
        code = %code,
        "Extraction request"
    );

    let worker_state = Arc::clone(&state);
    let outcome = tokio::task::spawn_blocking(move || {
        // The pipeline is never mutated, so a panic in an earlier batch leaves it usable
        let pipeline = worker_state
            .pipeline
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pipeline.process_batch(document_type, &items)
    })
    .await;

    match outcome {
        Ok(Ok(report)) => batch_response(report),
        Ok(Err(e)) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            tracing::error!("Server error: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {e}"))
        }
    }
}

fn batch_response(report: BatchReport) -> Response {
    if report.is_failure() {
        let details: Vec<FileOutcome> = report.failures().cloned().collect();
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: "Failed to extract data from any uploaded files".to_string(),
                details: Some(details),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(ExtractResponse {
            success: true,
            results: report.results,
            summary: report.summary,
        }),
    )
        .into_response()
}
