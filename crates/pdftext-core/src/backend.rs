//! Backend trait and identifiers

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised by a backend while reading a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The bytes could not be opened as a PDF document
    #[error("Failed to load PDF: {0}")]
    Load(String),

    /// A single page could not be read
    #[error("Failed to extract text from page {page}: {message}")]
    Page { page: u32, message: String },

    /// The library failed somewhere it does not report more precisely
    #[error("Failed to extract text: {0}")]
    Decode(String),
}

/// A PDF text extraction capability
///
/// Implementations wrap one third-party library. They are selected once at
/// startup and shared across requests, so they must be `Send + Sync` and
/// hold no per-request state.
pub trait PdfBackend: Send + Sync {
    /// Identifier reported as `library` in results and health checks
    fn name(&self) -> &'static str;

    /// Whether the backend can serve requests in this process
    fn is_available(&self) -> bool {
        true
    }

    /// Extract the text of every page, in page order
    ///
    /// The returned vector has exactly one entry per document page; pages
    /// without text yield an empty string.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError>;
}

/// Known backends, in default preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    PdfExtract,
    Lopdf,
}

impl BackendKind {
    /// Every known backend, primary first
    pub const ALL: [BackendKind; 2] = [BackendKind::PdfExtract, BackendKind::Lopdf];

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::PdfExtract => "pdf-extract",
            BackendKind::Lopdf => "lopdf",
        }
    }

    /// Whether the backend's cargo feature was enabled for this build
    pub fn is_compiled(self) -> bool {
        match self {
            BackendKind::PdfExtract => cfg!(feature = "pdf-extract"),
            BackendKind::Lopdf => cfg!(feature = "lopdf"),
        }
    }

    /// Construct the backend, or `None` if it was not compiled in
    pub fn instantiate(self) -> Option<Arc<dyn PdfBackend>> {
        match self {
            #[cfg(feature = "pdf-extract")]
            BackendKind::PdfExtract => Some(Arc::new(crate::backends::PdfExtractBackend::new())),
            #[cfg(feature = "lopdf")]
            BackendKind::Lopdf => Some(Arc::new(crate::backends::LopdfBackend::new())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised backend name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown PDF backend '{0}'. Expected one of: pdf-extract, lopdf")]
pub struct UnknownBackend(pub String);

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf-extract" | "pdf_extract" | "pdfextract" => Ok(BackendKind::PdfExtract),
            "lopdf" => Ok(BackendKind::Lopdf),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_names() {
        assert_eq!("pdf-extract".parse(), Ok(BackendKind::PdfExtract));
        assert_eq!("PDF_EXTRACT".parse(), Ok(BackendKind::PdfExtract));
        assert_eq!(" lopdf ".parse(), Ok(BackendKind::Lopdf));
        assert_eq!(
            "pypdf".parse::<BackendKind>(),
            Err(UnknownBackend("pypdf".to_string()))
        );
    }

    #[test]
    fn test_names_roundtrip_through_display() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_default_preference_order() {
        assert_eq!(BackendKind::ALL[0], BackendKind::PdfExtract);
        assert_eq!(BackendKind::ALL[1], BackendKind::Lopdf);
    }

    #[test]
    fn test_instantiate_matches_features() {
        for kind in BackendKind::ALL {
            let backend = kind.instantiate();
            assert_eq!(backend.is_some(), kind.is_compiled());
            if let Some(backend) = backend {
                assert_eq!(backend.name(), kind.as_str());
            }
        }
    }

    #[test]
    fn test_error_messages() {
        let err = BackendError::Page {
            page: 3,
            message: "bad font".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to extract text from page 3: bad font"
        );
        assert_eq!(
            BackendError::Load("invalid file header".to_string()).to_string(),
            "Failed to load PDF: invalid file header"
        );
    }
}
