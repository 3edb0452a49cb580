//! Loosely-typed input records from the upstream search step.

use serde::{Deserialize, Serialize};

/// A single raw search result.
///
/// Upstream search engines hand over arbitrarily shaped key/value records;
/// only `url`, `title`, and `description` matter here. All three are optional
/// and unknown keys are ignored. A record without a `url` can never become a
/// candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SearchResult {
    /// Leniently parse a raw JSON value into a `SearchResult`.
    ///
    /// Returns `None` for non-object values and for objects whose `url`,
    /// `title`, or `description` carry a non-string type. Callers skip such
    /// records silently rather than failing the batch.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Lowercased `title` + `description` concatenation used by the keyword
    /// heuristics. Missing fields contribute an empty string.
    #[must_use]
    pub fn text_content(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_with_all_fields() {
        let value = json!({"url": "https://a", "title": "T", "description": "D", "rank": 3});
        let result = SearchResult::from_value(&value).expect("expected Some");
        assert_eq!(result.url.as_deref(), Some("https://a"));
        assert_eq!(result.title.as_deref(), Some("T"));
        assert_eq!(result.description.as_deref(), Some("D"));
    }

    #[test]
    fn parses_object_with_missing_fields() {
        let value = json!({"snippet": "no url here"});
        let result = SearchResult::from_value(&value).expect("expected Some");
        assert!(result.url.is_none());
        assert!(result.title.is_none());
    }

    #[test]
    fn rejects_non_object_values() {
        assert!(SearchResult::from_value(&json!("just a string")).is_none());
        assert!(SearchResult::from_value(&json!(42)).is_none());
        assert!(SearchResult::from_value(&json!([1, 2])).is_none());
        assert!(SearchResult::from_value(&json!(null)).is_none());
    }

    #[test]
    fn rejects_wrongly_typed_url() {
        let value = json!({"url": 12345});
        assert!(SearchResult::from_value(&value).is_none());
    }

    #[test]
    fn text_content_lowercases_and_joins() {
        let result = SearchResult {
            url: None,
            title: Some("Viral VIDEO".to_string()),
            description: Some("2000 Views".to_string()),
        };
        assert_eq!(result.text_content(), "viral video 2000 views");
    }

    #[test]
    fn text_content_defaults_missing_fields_to_empty() {
        let result = SearchResult::default();
        assert_eq!(result.text_content(), " ");
    }
}
