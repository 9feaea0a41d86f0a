//! Query execution for the document index.
//!
//! The engine is a pure function over the immutable index and its arguments:
//! identical inputs always produce identical ordered results. Matching is
//! case-insensitive and restricted to the requested fields. Scoring is a
//! weighted sum designed so that:
//! - a title-field match always outranks a content-only match, and
//! - an exact token match outranks a partial (substring) match within a field.
//!
//! Ties keep index insertion order (the sort is stable), and limit/offset are
//! applied after ranking, never before.

use std::cmp::Ordering;

use crate::{DocumentIndex, IndexEntry, SearchResult};

/// Default result limit, mirroring the HTTP endpoint's default.
pub const DEFAULT_LIMIT: usize = 100;

/// Weight for an exact (whole-token) match within a field.
const EXACT_TOKEN_WEIGHT: f32 = 2.0;
/// Weight for a partial (substring) match within a field.
const PARTIAL_MATCH_WEIGHT: f32 = 1.0;
/// Field boost for the section and page titles.
const TITLE_BOOST: f32 = 3.0;
/// Field boost for fragment content.
const CONTENT_BOOST: f32 = 1.0;

/// A searchable field of an [`IndexEntry`].
///
/// Fields not listed in a search call are never matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// The section title.
    Title,
    /// The containing page's title.
    PageTitle,
    /// The fragment text.
    Content,
}

impl SearchField {
    /// Returns the field's text for an entry.
    fn text<'a>(&self, entry: &'a IndexEntry) -> &'a str {
        match self {
            Self::Title => &entry.title,
            Self::PageTitle => &entry.page_title,
            Self::Content => &entry.content,
        }
    }

    /// Returns the scoring boost applied to matches in this field.
    fn boost(&self) -> f32 {
        match self {
            Self::Title | Self::PageTitle => TITLE_BOOST,
            Self::Content => CONTENT_BOOST,
        }
    }
}

/// Options controlling result windowing.
///
/// Both apply after ranking: `offset` skips that many leading results, then
/// `limit` caps how many are returned.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of results to return.
    pub limit: usize,
    /// Number of leading results to skip.
    pub offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchOptions {
    /// Sets the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the result offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl DocumentIndex {
    /// Searches the index, returning scored results in rank order.
    ///
    /// An empty or whitespace-only query yields an empty list. Every query
    /// token must match at least one of the requested fields for an entry to
    /// be a candidate. Result `id`s are provisional positions; reconciliation
    /// reassigns them after deduplication.
    pub fn search(
        &self,
        query: &str,
        fields: &[SearchField],
        options: &SearchOptions,
    ) -> Vec<SearchResult> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&IndexEntry, f32)> = self
            .entries()
            .iter()
            .filter_map(|entry| score_entry(entry, &tokens, fields).map(|score| (entry, score)))
            .collect();

        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .skip(options.offset)
            .take(options.limit)
            .enumerate()
            .map(|(id, (entry, score))| SearchResult {
                id,
                url: entry.url.clone(),
                page_title: entry.page_title.clone(),
                title: entry.title.clone(),
                content: entry.content.clone(),
                score,
            })
            .collect()
    }
}

/// Splits a query into lowercase tokens on non-alphanumeric boundaries.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Scores an entry against the query tokens, or `None` if it does not match.
///
/// Every token must match in at least one field. Each token contributes the
/// sum of its per-field weights, so matching in several fields ranks an entry
/// above one matching in content alone.
fn score_entry(entry: &IndexEntry, tokens: &[String], fields: &[SearchField]) -> Option<f32> {
    let mut total = 0.0;

    for token in tokens {
        let mut token_score = 0.0;
        for field in fields {
            token_score += field_match_weight(field.text(entry), token) * field.boost();
        }
        if token_score == 0.0 {
            return None;
        }
        total += token_score;
    }

    Some(total)
}

/// Returns the match weight of a token within a field's text.
fn field_match_weight(text: &str, token: &str) -> f32 {
    let lower = text.to_lowercase();
    if tokenize(&lower).iter().any(|t| t == token) {
        EXACT_TOKEN_WEIGHT
    } else if lower.contains(token) {
        PARTIAL_MATCH_WEIGHT
    } else {
        0.0
    }
}
