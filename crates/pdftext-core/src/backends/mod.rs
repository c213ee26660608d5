//! Concrete extraction backends
//!
//! One module per third-party library, each gated on the cargo feature of
//! the same name:
//! - `pdf-extract`: layout-aware text extraction (primary)
//! - `lopdf`: content stream text operators (secondary)

#[cfg(feature = "lopdf")]
mod lopdf_backend;
#[cfg(feature = "pdf-extract")]
mod pdf_extract_backend;

#[cfg(feature = "lopdf")]
pub use lopdf_backend::LopdfBackend;
#[cfg(feature = "pdf-extract")]
pub use pdf_extract_backend::PdfExtractBackend;
