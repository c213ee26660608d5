//! pdftext server binary
//!
//! Selects a PDF backend once, then serves `/health` and `/parse` until
//! Ctrl+C or SIGTERM.

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pdftext_core::{BackendSelection, TextExtractor};
use pdftext_server::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present, before clap reads the environment
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Initialize logging
    let log_level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pdftext server v{}", env!("CARGO_PKG_VERSION"));

    // Backend selection happens exactly once, before any request; the
    // selector logs the outcome
    debug!("Backend preference: {}", config.backends);
    let selection = BackendSelection::from_preferences(&config.backends);

    let state = AppState::new(TextExtractor::new(selection));
    let app = build_router(state, config.max_body_bytes());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    info!("PDF service listening on http://{}", listener.local_addr()?);
    info!("Max body size: {} MiB", config.max_body_mb);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        },
    }
}
