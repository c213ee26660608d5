//! Backend using lopdf
//!
//! Reads text showing operators straight from each page's content stream.
//! Less faithful to layout than pdf-extract, but tolerant of fonts that
//! pdf-extract cannot map.

use lopdf::Document;

use crate::backend::{BackendError, PdfBackend};

/// Secondary backend using lopdf
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        let doc = Document::load_mem(data).map_err(|e| BackendError::Load(e.to_string()))?;

        // get_pages is keyed by 1-based page number, so iteration is in page order
        doc.get_pages()
            .keys()
            .map(|&page| {
                doc.extract_text(&[page])
                    .map_err(|e| BackendError::Page {
                        page,
                        message: e.to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backend_name() {
        assert_eq!(LopdfBackend::new().name(), "lopdf");
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let pdf = fixtures::pdf_with_pages(&["Alpha", "Bravo", "Charlie"]);
        let pages = LopdfBackend::new().extract_pages(&pdf).unwrap();
        let trimmed: Vec<&str> = pages.iter().map(|p| p.trim()).collect();
        assert_eq!(trimmed, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_page_without_text_is_empty() {
        let pdf = fixtures::pdf_with_pages(&["", "Only text"]);
        let pages = LopdfBackend::new().extract_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].trim(), "");
        assert_eq!(pages[1].trim(), "Only text");
    }

    #[test]
    fn test_invalid_bytes_fail_to_load() {
        let err = LopdfBackend::new()
            .extract_pages(b"%PDF-1.4 truncated")
            .unwrap_err();
        assert!(matches!(err, BackendError::Load(_)));
    }
}
