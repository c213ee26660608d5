//! HTTP client for the pdftext service
//!
//! Used by document pipelines that run the service as a sidecar: send the
//! PDF bytes, get the text back, or a single error carrying the service's
//! message.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::Duration;

use pdftext_core::ExtractionResult;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// Where the service listens unless told otherwise
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8081";

/// Per-request timeout; large scans can take a while to extract
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// How long a launched service gets to answer `/health`
pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(100);
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(1);

/// Text and page count of a successfully parsed PDF
pub type ParsedPdf = ExtractionResult;

/// Client-side failures
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Calling PDF service: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Decoding response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The service answered with an `error` field
    #[error("PDF parse error: {0}")]
    Service(String),

    #[error("Invalid service URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Starting PDF service {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF service exited during startup: {0}")]
    Exited(ExitStatus),

    #[error("PDF service not healthy after {0:?}")]
    StartupTimeout(Duration),
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub library: Option<String>,
}

/// Client for a running pdftext service
#[derive(Debug, Clone)]
pub struct PdfServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl PdfServiceClient {
    /// Create a client for the service at `base_url`
    ///
    /// An empty URL falls back to [`DEFAULT_SERVICE_URL`].
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = match base_url.trim_end_matches('/') {
            "" => DEFAULT_SERVICE_URL.to_string(),
            url => url.to_string(),
        };

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Formats this client can submit
    pub fn supported_formats(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    /// Extract text from `data` through the service
    ///
    /// The response body is decoded whatever the status code, since the
    /// service reports failures as JSON too.
    pub async fn parse(&self, data: Vec<u8>) -> Result<ParsedPdf, ClientError> {
        let response = self
            .client
            .post(format!("{}/parse", self.base_url))
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await
            .map_err(ClientError::Request)?;

        let result: ExtractionResult = response.json().await.map_err(ClientError::Decode)?;

        if result.is_error() {
            return Err(ClientError::Service(result.error.unwrap_or_default()));
        }

        Ok(result)
    }

    /// Fetch the service's health report
    pub async fn health(&self) -> Result<ServiceHealth, ClientError> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(ClientError::Request)?
            .error_for_status()
            .map_err(ClientError::Request)?
            .json()
            .await
            .map_err(ClientError::Decode)
    }

    /// True when `GET /health` answers with a health report
    pub async fn is_healthy(&self) -> bool {
        self.health().await.is_ok()
    }

    /// Launch the server binary at `binary` on this client's host and port
    ///
    /// Resolves once the new process answers `/health`. The process is
    /// killed when the returned handle is stopped or dropped.
    pub async fn start_service(&self, binary: &Path) -> Result<ServiceHandle, ClientError> {
        let url = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;
        let (host, port) = match (url.host_str(), url.port_or_known_default()) {
            (Some(host), Some(port)) => (host.to_string(), port),
            _ => {
                return Err(ClientError::InvalidUrl {
                    url: self.base_url.clone(),
                    message: "missing host or port".to_string(),
                })
            }
        };

        info!("Starting PDF service {} on {}:{}", binary.display(), host, port);

        let child = Command::new(binary)
            .arg("--host")
            .arg(&host)
            .arg("--port")
            .arg(port.to_string())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ClientError::Spawn {
                path: binary.to_path_buf(),
                source,
            })?;

        let mut handle = ServiceHandle { child };
        handle.wait_until_healthy(self).await?;
        Ok(handle)
    }
}

/// A service process started by [`PdfServiceClient::start_service`]
#[derive(Debug)]
pub struct ServiceHandle {
    child: Child,
}

impl ServiceHandle {
    /// OS process id, `None` once the process has been reaped
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    async fn wait_until_healthy(&mut self, client: &PdfServiceClient) -> Result<(), ClientError> {
        let deadline = tokio::time::Instant::now() + STARTUP_TIMEOUT;

        loop {
            if let Ok(Some(status)) = self.child.try_wait() {
                return Err(ClientError::Exited(status));
            }

            let check = tokio::time::timeout(HEALTH_CHECK_TIMEOUT, client.is_healthy());
            if let Ok(true) = check.await {
                debug!("PDF service ready at {}", client.base_url());
                return Ok(());
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(ClientError::StartupTimeout(STARTUP_TIMEOUT));
            }

            tokio::time::sleep(STARTUP_POLL_INTERVAL).await;
        }
    }

    /// Kill the process and wait for it to exit
    pub async fn stop(mut self) -> std::io::Result<()> {
        self.child.kill().await
    }
}
