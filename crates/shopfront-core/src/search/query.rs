//! Free-text search query.

use serde::{Deserialize, Serialize};

/// A free-text search query.
///
/// Keeps the raw text for display alongside the normalized terms the
/// filter engine matches with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchQuery {
    raw: String,
    terms: Vec<String>,
}

impl SearchQuery {
    /// Parse raw search text: lower-case, split on whitespace, drop empty
    /// tokens.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { raw, terms }
    }

    /// The text exactly as entered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized search terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when there are no terms, so every product passes.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms joined by single spaces; equal for queries that match the
    /// same products.
    pub fn normalized(&self) -> String {
        self.terms.join(" ")
    }

    /// Check that every term occurs in the given lower-cased text.
    pub fn matches_text(&self, haystack: &str) -> bool {
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        SearchQuery::new(raw)
    }
}

impl From<String> for SearchQuery {
    fn from(raw: String) -> Self {
        SearchQuery::new(raw)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> String {
        query.raw
    }
}
