//! Result types shared by the extractor, the server and the client

use serde::{Deserialize, Serialize};

/// Outcome of extracting text from one PDF document
///
/// Serializes to the service's wire format. `library` is only present on
/// success and `error` only on failure:
///
/// ```json
/// {"text": "Hello World", "pages": 1, "library": "pdf-extract"}
/// {"text": "", "pages": 0, "error": "No PDF library installed"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Non-empty page texts joined by a blank line, trimmed
    #[serde(default)]
    pub text: String,
    /// Number of pages in the source document
    #[serde(default)]
    pub pages: usize,
    /// Backend that produced the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn success(text: String, pages: usize, library: &str) -> Self {
        Self {
            text,
            pages,
            library: Some(library.to_string()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            pages: 0,
            library: None,
            error: Some(message.into()),
        }
    }

    /// True when the result carries a non-empty error message
    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Length of `text` in characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_without_error() {
        let result = ExtractionResult::success("Hello".to_string(), 2, "lopdf");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"text": "Hello", "pages": 2, "library": "lopdf"})
        );
    }

    #[test]
    fn test_failure_serializes_without_library() {
        let result = ExtractionResult::failure("broken xref");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"text": "", "pages": 0, "error": "broken xref"})
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_empty_error_is_not_an_error() {
        let mut result = ExtractionResult::success(String::new(), 0, "lopdf");
        result.error = Some(String::new());
        assert!(!result.is_error());
    }

    #[test]
    fn test_char_count_counts_unicode_scalars() {
        let result = ExtractionResult::success("héllo".to_string(), 1, "lopdf");
        assert_eq!(result.char_count(), 5);
        assert_eq!(result.text.len(), 6);
    }

    #[test]
    fn test_deserialize_error_body_with_missing_fields() {
        let result: ExtractionResult =
            serde_json::from_str(r#"{"error": "Unknown endpoint"}"#).unwrap();
        assert_eq!(result.error.as_deref(), Some("Unknown endpoint"));
        assert_eq!(result.pages, 0);
        assert!(result.text.is_empty());
    }
}
