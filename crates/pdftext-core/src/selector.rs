//! Startup selection of the extraction backend
//!
//! Candidates are probed in preference order and the first available one
//! wins. The resulting [`BackendSelection`] is immutable and cheap to clone;
//! it is built once before the server accepts connections and handed to the
//! request handlers.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::backend::{BackendKind, PdfBackend};

/// The backend chosen at startup, if any
#[derive(Clone, Default)]
pub struct BackendSelection {
    backend: Option<Arc<dyn PdfBackend>>,
}

impl BackendSelection {
    /// A selection with no backend (degraded mode)
    pub fn none() -> Self {
        Self { backend: None }
    }

    /// Use `backend` without probing
    pub fn with_backend(backend: Arc<dyn PdfBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Probe the built-in backends in their default order
    pub fn probe_default() -> Self {
        Self::probe(&BackendKind::ALL)
    }

    /// Probe built-in backends in the given order
    ///
    /// Kinds that were not compiled in are skipped. Never fails: when no
    /// candidate is usable the selection is empty.
    pub fn probe(candidates: &[BackendKind]) -> Self {
        let backends = candidates.iter().filter_map(|&kind| {
            let backend = kind.instantiate();
            if backend.is_none() {
                debug!(backend = %kind, "PDF backend not compiled into this build");
            }
            backend
        });
        Self::first_available(backends)
    }

    /// Select the first backend in `candidates` that reports itself available
    pub fn first_available<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn PdfBackend>>,
    {
        for backend in candidates {
            if backend.is_available() {
                info!(backend = backend.name(), "Selected PDF backend");
                return Self::with_backend(backend);
            }
            debug!(backend = backend.name(), "PDF backend reports unavailable");
        }

        warn!("No PDF backend available; /parse will report an error");
        Self::none()
    }

    /// Parse a comma-separated preference list such as `"lopdf,pdf-extract"`
    ///
    /// Unknown names are logged and dropped, duplicates keep their first
    /// position. An empty list yields no candidates.
    pub fn parse_preferences(list: &str) -> Vec<BackendKind> {
        let mut kinds = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.parse::<BackendKind>() {
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(e) => warn!("{}", e),
            }
        }
        kinds
    }

    /// Build a selection from a preference list (see [`Self::parse_preferences`])
    pub fn from_preferences(list: &str) -> Self {
        Self::probe(&Self::parse_preferences(list))
    }

    /// The selected backend
    pub fn backend(&self) -> Option<&Arc<dyn PdfBackend>> {
        self.backend.as_ref()
    }

    /// Name of the selected backend
    pub fn library(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }
}

impl fmt::Debug for BackendSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendSelection")
            .field("library", &self.library())
            .finish()
    }
}
