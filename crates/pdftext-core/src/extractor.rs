//! Text extraction adapter
//!
//! [`TextExtractor::extract`] is infallible: every failure, including a
//! panic inside a backend, comes back as an [`ExtractionResult`] carrying an
//! error message, so callers never have to guard the call.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::selector::BackendSelection;
use crate::types::ExtractionResult;

/// Error reported when no backend was selected at startup
pub const NO_LIBRARY_MESSAGE: &str = "No PDF library installed";

/// Separator placed between the text of consecutive pages
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Extracts text through the backend chosen at startup
#[derive(Clone, Debug, Default)]
pub struct TextExtractor {
    selection: BackendSelection,
}

impl TextExtractor {
    pub fn new(selection: BackendSelection) -> Self {
        Self { selection }
    }

    /// Name of the backend in use
    pub fn library(&self) -> Option<&'static str> {
        self.selection.library()
    }

    /// Extract page count and text from raw PDF bytes
    pub fn extract(&self, data: &[u8]) -> ExtractionResult {
        let Some(backend) = self.selection.backend() else {
            return ExtractionResult::failure(NO_LIBRARY_MESSAGE);
        };

        match panic::catch_unwind(AssertUnwindSafe(|| backend.extract_pages(data))) {
            Ok(Ok(pages)) => ExtractionResult::success(join_pages(&pages), pages.len(), backend.name()),
            Ok(Err(e)) => ExtractionResult::failure(e.to_string()),
            Err(payload) => ExtractionResult::failure(format!(
                "PDF backend panicked: {}",
                panic_message(payload.as_ref())
            )),
        }
    }
}

/// Join page texts with a blank line, skipping pages that have no text
///
/// Each page is trimmed first, so a page holding only whitespace counts as
/// empty. Skipped pages leave no marker: the number of segments in the
/// output can be lower than the document's page count.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
