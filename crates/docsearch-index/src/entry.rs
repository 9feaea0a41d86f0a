//! The indexed unit of documentation text.

use serde::{Deserialize, Serialize};

/// One searchable text unit tied to a page and optional section anchor.
///
/// Entries are produced at site build time and loaded as a JSON snapshot.
/// The `url` base path (before `#`) must resolve to a real page; the anchor,
/// when present, identifies a sub-section of that page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Page path plus optional `#anchor`.
    pub url: String,
    /// Title of the containing page.
    #[serde(rename = "pageTitle")]
    pub page_title: String,
    /// Title of the specific section (may equal `page_title`).
    pub title: String,
    /// Fragment text.
    pub content: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserializes_snapshot_shape() {
        let json = r##"{
            "url": "/guide#setup",
            "pageTitle": "Guide",
            "title": "Setup",
            "content": "How to set things up."
        }"##;

        let entry: IndexEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.url, "/guide#setup");
        assert_eq!(entry.page_title, "Guide");
        assert_eq!(entry.title, "Setup");
    }

    #[test]
    fn round_trips_field_names() {
        let entry = IndexEntry {
            url: "/a".to_string(),
            page_title: "A".to_string(),
            title: "A".to_string(),
            content: "text".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"pageTitle\""));
        let back: IndexEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
