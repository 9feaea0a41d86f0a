//! Response shaping for the HTTP boundary.
//!
//! Takes reconciled engine results and turns them into presentation records:
//! absolute site URLs, a companion embed URL, a deprecation flag, the keyword
//! breadcrumb, and a snippet truncated to its first sentence. Internal-only
//! fields (`score`, `page_title`) do not appear in the output. A result whose
//! page has no metadata is dropped silently; a malformed result aborts the
//! whole request.

use docsearch_index::{SearchResult, split_url};
use serde::Serialize;

use crate::{MetaProvider, ServerConfig, ServerError};

/// Breadcrumb segment separator used in metadata `alt` strings.
const BREADCRUMB_SEPARATOR: &str = " › ";

/// One search result as emitted over HTTP.
///
/// Fields are declared alphabetically so serialized output reads in sorted
/// key order; consumers must not depend on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedResult {
    /// True iff the page lives under the deprecated-content prefix.
    pub deprecated: bool,
    /// Page description from metadata.
    pub description: String,
    /// Absolute embed URL (`?embed=true`, original anchor re-appended).
    pub embed: String,
    /// Position within the result set.
    pub id: usize,
    /// Keyword breadcrumb segments.
    pub keywords: Vec<String>,
    /// First sentence of the matched fragment.
    pub snippet: String,
    /// Canonical page title from metadata.
    pub title: String,
    /// Absolute result URL.
    pub url: String,
}

/// Shapes reconciled results for the response.
///
/// Results without metadata are excluded; any malformed result fails the
/// whole batch so partial output is never produced.
pub fn shape_results(
    results: &[SearchResult],
    meta: &dyn MetaProvider,
    config: &ServerConfig,
) -> Result<Vec<ShapedResult>, ServerError> {
    let mut shaped = Vec::with_capacity(results.len());

    for result in results {
        if let Some(record) = shape_result(result, meta, config)? {
            shaped.push(record);
        }
    }

    Ok(shaped)
}

/// Shapes a single result, or `None` when its page has no metadata.
fn shape_result(
    result: &SearchResult,
    meta: &dyn MetaProvider,
    config: &ServerConfig,
) -> Result<Option<ShapedResult>, ServerError> {
    if !result.url.starts_with('/') {
        return Err(ServerError::Shape(format!(
            "result url is not site-relative: {}",
            result.url
        )));
    }

    let (base, anchor) = split_url(&result.url);
    let deprecated = base.starts_with(&config.deprecated_prefix);

    let Some(page) = meta.get_meta(base, deprecated) else {
        return Ok(None);
    };

    let anchor_suffix = match anchor {
        Some(a) => format!("#{a}"),
        None => String::new(),
    };

    Ok(Some(ShapedResult {
        deprecated,
        description: page.description,
        embed: format!("{}{base}?embed=true{anchor_suffix}", config.base_url),
        id: result.id,
        keywords: keywords(&page.nav, &result.page_title),
        snippet: first_sentence(&result.content).to_string(),
        title: page.title,
        url: format!("{}{}", config.base_url, result.url),
    }))
}

/// Derives the keyword breadcrumb from navigation metadata.
///
/// Prefers the prebuilt `alt` string; otherwise assembles the hierarchy from
/// the individual segments, ending with the page title.
fn keywords(nav: &crate::NavMeta, page_title: &str) -> Vec<String> {
    if let Some(alt) = &nav.alt {
        return alt
            .split(BREADCRUMB_SEPARATOR)
            .map(|s| s.to_string())
            .collect();
    }

    [
        nav.parent.as_deref(),
        nav.child.as_deref(),
        nav.title.as_deref().or(Some(page_title)),
    ]
    .into_iter()
    .flatten()
    .map(|s| s.to_string())
    .collect()
}

/// Truncates multi-sentence text to its first sentence.
fn first_sentence(text: &str) -> &str {
    match text.split_once(". ") {
        Some((first, _)) => first,
        None => text,
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::{NavMeta, PageMeta, StaticMeta};

    use super::*;

    fn config() -> ServerConfig {
        ServerConfig::default().with_base_url("https://docs.test")
    }

    fn result(id: usize, url: &str, content: &str) -> SearchResult {
        SearchResult {
            id,
            url: url.to_string(),
            page_title: "Guide".to_string(),
            title: "Setup".to_string(),
            content: content.to_string(),
            score: 6.0,
        }
    }

    fn provider() -> StaticMeta {
        let page = PageMeta {
            title: "Guide".to_string(),
            description: "All about guides.".to_string(),
            nav: NavMeta {
                alt: Some("Docs › Guides › Guide".to_string()),
                ..NavMeta::default()
            },
        };
        let old = PageMeta {
            title: "Old Guide".to_string(),
            description: "Deprecated.".to_string(),
            nav: NavMeta::default(),
        };
        StaticMeta::from_pages(
            HashMap::from([("/guide".to_string(), page)]),
            HashMap::from([("/deprecated/old".to_string(), old)]),
        )
    }

    #[test]
    fn rewrites_urls_and_synthesizes_embed_link() {
        let shaped = shape_results(
            &[result(0, "/guide#setup", "First. Second.")],
            &provider(),
            &config(),
        )
        .unwrap();

        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].url, "https://docs.test/guide#setup");
        assert_eq!(shaped[0].embed, "https://docs.test/guide?embed=true#setup");
    }

    #[test]
    fn embed_link_without_anchor_has_no_fragment() {
        let shaped = shape_results(&[result(0, "/guide", "Text")], &provider(), &config()).unwrap();

        assert_eq!(shaped[0].embed, "https://docs.test/guide?embed=true");
    }

    #[test]
    fn snippet_is_first_sentence_only() {
        let shaped = shape_results(
            &[result(0, "/guide", "First sentence. Second sentence. Third.")],
            &provider(),
            &config(),
        )
        .unwrap();

        assert_eq!(shaped[0].snippet, "First sentence");
    }

    #[test]
    fn keywords_come_from_the_breadcrumb() {
        let shaped = shape_results(&[result(0, "/guide", "Text")], &provider(), &config()).unwrap();

        assert_eq!(shaped[0].keywords, ["Docs", "Guides", "Guide"]);
    }

    #[test]
    fn deprecated_prefix_sets_the_flag() {
        let shaped = shape_results(
            &[result(0, "/deprecated/old", "Text")],
            &provider(),
            &config(),
        )
        .unwrap();

        assert!(shaped[0].deprecated);
        assert_eq!(shaped[0].title, "Old Guide");
    }

    #[test]
    fn result_without_metadata_is_dropped_silently() {
        let shaped = shape_results(
            &[result(0, "/guide", "Text"), result(1, "/unknown", "Text")],
            &provider(),
            &config(),
        )
        .unwrap();

        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].url, "https://docs.test/guide");
    }

    #[test]
    fn malformed_url_fails_the_whole_batch() {
        let err = shape_results(
            &[result(0, "/guide", "Text"), result(1, "notapath", "Text")],
            &provider(),
            &config(),
        )
        .unwrap_err();

        assert!(matches!(err, ServerError::Shape(_)));
    }

    #[test]
    fn internal_fields_never_reach_the_output() {
        let shaped = shape_results(&[result(0, "/guide", "Text")], &provider(), &config()).unwrap();

        let json = serde_json::to_value(&shaped[0]).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("score"));
        assert!(!object.contains_key("pageTitle"));
        assert!(!object.contains_key("page_title"));
    }
}
