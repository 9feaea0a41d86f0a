//! Navigation target normalization.
//!
//! Duplicate headings on a page get numbered slug suffixes (`#setup`,
//! `#setup-1`, `#setup-2`). When such a result is selected, the trailing
//! numeric disambiguator is stripped so both navigation and the recent-search
//! record point at the canonical target.

/// Strips a single trailing `-N` numeric disambiguator suffix, if present.
pub fn normalize_target(url: &str) -> &str {
    if let Some(pos) = url.rfind('-') {
        let suffix = &url[pos + 1..];
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return &url[..pos];
        }
    }
    url
}
