//! Search result types.

use serde::Serialize;

/// A scored match derived from an [`crate::IndexEntry`] at query time.
///
/// `score` exists for internal ranking only and must be stripped before a
/// result crosses the HTTP boundary. `id` is dense and zero-based within one
/// result set, assigned in final display order after reconciliation; it is not
/// stable across queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Position within the result set (0-based, display order).
    pub id: usize,
    /// Page path plus optional `#anchor`.
    pub url: String,
    /// Title of the containing page.
    #[serde(rename = "pageTitle")]
    pub page_title: String,
    /// Title of the matched section.
    pub title: String,
    /// Fragment text.
    pub content: String,
    /// Relevance score, higher is better.
    pub score: f32,
}

impl SearchResult {
    /// Returns the base path of `url`, before any `#anchor`.
    pub fn base_url(&self) -> &str {
        split_url(&self.url).0
    }

    /// Returns the anchor of `url`, without the leading `#`, if present.
    pub fn anchor(&self) -> Option<&str> {
        split_url(&self.url).1
    }
}

/// Splits a URL into its base path and optional anchor (without the `#`).
pub fn split_url(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((base, anchor)) => (base, Some(anchor)),
        None => (url, None),
    }
}
