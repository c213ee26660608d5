//! Error types for the pdftext server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request-level failures answered before extraction runs
///
/// Extraction failures are not errors at this level: they travel as an
/// `ExtractionResult` with a 500 status so the client sees the full object.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("No PDF data")]
    NoPdfData,

    #[error("Use POST /parse with PDF data")]
    UsePostParse,

    #[error("Unknown endpoint")]
    UnknownEndpoint,

    #[error("Unsupported method")]
    UnsupportedMethod,

    /// The body could not be read (too large, connection dropped)
    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NoPdfData | ServerError::UsePostParse => StatusCode::BAD_REQUEST,
            ServerError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ServerError::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::BodyRejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ServerError::BodyRejected { message, .. } = &self {
            tracing::warn!("Rejected request body: {}", message);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
