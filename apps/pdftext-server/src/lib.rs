//! pdftext server
//!
//! A small HTTP service that accepts a PDF and returns its text and page
//! count as JSON. Extraction is delegated to whichever backend from
//! `pdftext-core` was selected at startup.
//!
//! ## Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | /health | 200 `{"status":"ok","library":...}` | |
//! | POST | /parse | 200 `{"text","pages","library"}` | 400 empty body, 500 extraction error |
//! | GET | other | | 400 |
//! | POST | other | | 404 |
//! | other | any | | 405 |
//!
//! The binary in `main.rs` wires this router to a listener; the
//! [`client`] module is the caller's side of the same contract.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod state;

pub use client::{ClientError, ParsedPdf, PdfServiceClient, ServiceHandle, ServiceHealth};
pub use config::Config;
pub use error::ServerError;
pub use state::AppState;

use api::{handle_health, handle_parse, handle_unknown};

/// Build the service router
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handle_health).fallback(handle_unknown))
        .route("/parse", post(handle_parse).fallback(handle_unknown))
        .fallback(handle_unknown)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
