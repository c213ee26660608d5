//! Application state for the pdftext server

use pdftext_core::TextExtractor;

/// Shared application state
///
/// Holds the extractor built from the startup backend selection. It is
/// read-only after construction, so handlers share it without locking.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    extractor: TextExtractor,
}

impl AppState {
    pub fn new(extractor: TextExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }
}
