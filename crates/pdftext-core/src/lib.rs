//! PDF text extraction over interchangeable backends
//!
//! This crate provides the extraction side of the pdftext service:
//!
//! - [`PdfBackend`]: the capability every extraction library is wrapped in
//! - [`BackendSelection`]: picks the first available backend once at startup
//! - [`TextExtractor`]: turns raw PDF bytes into an [`ExtractionResult`]
//!
//! ## Backends
//!
//! | Backend | Feature | Preference |
//! |---------|---------|------------|
//! | `pdf-extract` | `pdf-extract` | primary |
//! | `lopdf` | `lopdf` | secondary |
//!
//! Both features are enabled by default. Building with neither still
//! produces a working crate: selection yields no backend and every
//! extraction reports `"No PDF library installed"`.
//!
//! ## Usage
//!
//! ```no_run
//! use pdftext_core::{BackendSelection, TextExtractor};
//!
//! let extractor = TextExtractor::new(BackendSelection::probe_default());
//! let result = extractor.extract(&std::fs::read("lease.pdf").unwrap());
//! println!("{} pages", result.pages);
//! ```

pub mod backend;
pub mod backends;
pub mod extractor;
pub mod selector;
pub mod types;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use backend::{BackendError, BackendKind, PdfBackend, UnknownBackend};
pub use extractor::{join_pages, TextExtractor, NO_LIBRARY_MESSAGE};
pub use selector::BackendSelection;
pub use types::ExtractionResult;
