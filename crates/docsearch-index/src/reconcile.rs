//! Post-scoring result reconciliation.
//!
//! Documentation pages are indexed at multiple section granularities, so a
//! single query can match the same page once per heading. Reconciliation
//! collapses raw candidates to at most one result per page/anchor
//! combination, in two ordered passes:
//!
//! 1. At most one candidate per distinct page title survives, favoring the
//!    first (highest-ranked) occurrence.
//! 2. Among the remainder, the first appearance of a page's base path is
//!    kept; anchored candidates whose full URL is new are kept; anchor-less
//!    candidates whose base path is already represented are redundant
//!    whole-page duplicates and are dropped.
//!
//! Survivors are renumbered with dense, zero-based ids in final order.

use std::collections::HashSet;

use crate::{SearchResult, split_url};

/// Deduplicates and renumbers scored candidates into the final result list.
///
/// Applied after scoring and before display or return. Idempotent.
pub fn reconcile(candidates: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen_page_titles: HashSet<String> = HashSet::new();
    let mut seen_bases: HashSet<String> = HashSet::new();
    let mut seen_urls: HashSet<String> = HashSet::new();

    let mut survivors: Vec<SearchResult> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if !seen_page_titles.insert(candidate.page_title.clone()) {
            continue;
        }

        let (base, anchor) = split_url(&candidate.url);
        let is_new_base = !seen_bases.contains(base);
        let is_new_url = !seen_urls.contains(&candidate.url);

        let keep = is_new_base || (anchor.is_some() && is_new_url);
        if keep {
            seen_bases.insert(base.to_string());
            seen_urls.insert(candidate.url.clone());
            survivors.push(candidate);
        }
    }

    for (id, survivor) in survivors.iter_mut().enumerate() {
        survivor.id = id;
    }

    survivors
}
