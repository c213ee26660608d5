//! API handlers for the pdftext server
//!
//! - `GET /health`: reports the selected backend
//! - `POST /parse`: extracts text from the PDF in the request body
//! - anything else: JSON error chosen by method

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, Method, StatusCode},
    Json,
};
use pdftext_core::ExtractionResult;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Selected backend, `null` when none is installed
    pub library: Option<&'static str>,
}

/// Handler: GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        library: state.extractor().library(),
    })
}

/// Handler: POST /parse
///
/// The body is the raw PDF and must be announced by a non-zero
/// `Content-Length`. Extraction failures answer 500 with the full result
/// object rather than a bare error, so clients can treat both outcomes
/// uniformly.
pub async fn handle_parse(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ExtractionResult>), ServerError> {
    if declared_length(&headers).unwrap_or(0) == 0 {
        return Err(ServerError::NoPdfData);
    }

    let body = body.map_err(|rejection| ServerError::BodyRejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    if body.is_empty() {
        return Err(ServerError::NoPdfData);
    }

    debug!("Parse request: {} bytes", body.len());

    let extractor = state.extractor().clone();
    let result = tokio::task::spawn_blocking(move || extractor.extract(&body))
        .await
        .unwrap_or_else(|join_error| {
            ExtractionResult::failure(format!("Extraction task failed: {}", join_error))
        });

    if result.is_error() {
        warn!(
            "PDF extraction failed: {}",
            result.error.as_deref().unwrap_or_default()
        );
        return Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(result)));
    }

    info!(
        "Parsed PDF: {} pages, {} chars",
        result.pages,
        result.char_count()
    );
    Ok((StatusCode::OK, Json(result)))
}

/// `Content-Length` as sent by the client; `None` when absent or unparseable
fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Fallback for every unmatched method/path combination
pub async fn handle_unknown(method: Method) -> ServerError {
    match method {
        Method::GET | Method::HEAD => ServerError::UsePostParse,
        Method::POST => ServerError::UnknownEndpoint,
        _ => ServerError::UnsupportedMethod,
    }
}
