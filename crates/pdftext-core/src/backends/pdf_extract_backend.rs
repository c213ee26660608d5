//! Backend using pdf-extract
//!
//! pdf-extract lays text out using glyph positions and font metrics, which
//! keeps word spacing and line breaks closer to what a reader sees.

use crate::backend::{BackendError, PdfBackend};

/// Primary backend using pdf-extract
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        // Load and per-page failures both arrive as OutputError, so they
        // cannot be told apart here
        pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}
