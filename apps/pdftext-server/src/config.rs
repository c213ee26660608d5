//! Command-line and environment configuration

use clap::Parser;

/// Default request body limit in MiB
pub const DEFAULT_MAX_BODY_MB: usize = 64;

/// Command-line arguments for the pdftext server
///
/// Every option except `--verbose` can also be set through the environment
/// (or a `.env` file, loaded before parsing).
#[derive(Parser, Debug, Clone)]
#[command(name = "pdftext-server")]
#[command(about = "HTTP service extracting text and page counts from PDF documents")]
#[command(version)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "PDFTEXT_HOST", default_value = "localhost")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PDFTEXT_PORT", default_value = "8081")]
    pub port: u16,

    /// PDF backends to try, in order of preference
    #[arg(long, env = "PDFTEXT_BACKENDS", default_value = "pdf-extract,lopdf")]
    pub backends: String,

    /// Largest accepted request body, in MiB
    #[arg(long, env = "PDFTEXT_MAX_BODY_MB", default_value_t = DEFAULT_MAX_BODY_MB)]
    pub max_body_mb: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(1024 * 1024)
    }
}
