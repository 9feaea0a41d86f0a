//! The page metadata collaborator.
//!
//! Metadata (page title, description, navigation breadcrumb) is produced by
//! the site build, separately from the search index. The endpoint consults it
//! through [`MetaProvider`]; a missing entry means "no enrichment available"
//! and the affected result is dropped from the response rather than rendered
//! bare.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::ServerError;

/// Navigation placement of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMeta {
    /// Parent section title.
    #[serde(default)]
    pub parent: Option<String>,
    /// Child section title.
    #[serde(default)]
    pub child: Option<String>,
    /// The page's own navigation title.
    #[serde(default)]
    pub title: Option<String>,
    /// Full breadcrumb string, segments joined with `" › "`.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Build-time metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Canonical page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Navigation placement.
    #[serde(default)]
    pub nav: NavMeta,
}

/// Looks up page metadata by base path.
pub trait MetaProvider {
    /// Returns metadata for a page, or `None` if the page has none.
    ///
    /// `deprecated` selects the deprecated-content metadata table.
    fn get_meta(&self, base_path: &str, deprecated: bool) -> Option<PageMeta>;
}

/// On-disk shape of the metadata file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct MetaTables {
    /// Current pages, keyed by base path.
    #[serde(default)]
    pages: HashMap<String, PageMeta>,
    /// Deprecated pages, keyed by base path.
    #[serde(default)]
    deprecated: HashMap<String, PageMeta>,
}

/// A [`MetaProvider`] backed by the build-time metadata JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticMeta {
    /// Current and deprecated lookup tables.
    tables: MetaTables,
}

impl StaticMeta {
    /// Loads metadata from a JSON file with `pages` and `deprecated` tables.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let contents = fs::read_to_string(path).map_err(|source| ServerError::ReadMeta {
            path: path.to_path_buf(),
            source,
        })?;

        let tables = serde_json::from_str(&contents).map_err(|e| ServerError::ParseMeta {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self { tables })
    }

    /// Creates a provider from in-memory tables (used by tests and fixtures).
    pub fn from_pages(
        pages: HashMap<String, PageMeta>,
        deprecated: HashMap<String, PageMeta>,
    ) -> Self {
        Self {
            tables: MetaTables { pages, deprecated },
        }
    }
}

impl MetaProvider for StaticMeta {
    fn get_meta(&self, base_path: &str, deprecated: bool) -> Option<PageMeta> {
        let table = if deprecated {
            &self.tables.deprecated
        } else {
            &self.tables.pages
        };
        table.get(base_path).cloned()
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn meta(title: &str) -> PageMeta {
        PageMeta {
            title: title.to_string(),
            description: format!("About {title}."),
            nav: NavMeta {
                alt: Some(format!("Docs › {title}")),
                ..NavMeta::default()
            },
        }
    }

    #[test]
    fn looks_up_by_base_path_and_flag() {
        let provider = StaticMeta::from_pages(
            HashMap::from([("/a".to_string(), meta("A"))]),
            HashMap::from([("/deprecated/old".to_string(), meta("Old"))]),
        );

        assert_eq!(provider.get_meta("/a", false).unwrap().title, "A");
        assert!(provider.get_meta("/a", true).is_none());
        assert_eq!(
            provider.get_meta("/deprecated/old", true).unwrap().title,
            "Old"
        );
    }

    #[test]
    fn missing_page_is_none() {
        let provider = StaticMeta::default();
        assert!(provider.get_meta("/nope", false).is_none());
    }

    #[test]
    fn loads_metadata_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        fs::write(
            &path,
            r##"{
                "pages": {
                    "/a": {
                        "title": "A",
                        "description": "About A.",
                        "nav": {"alt": "Docs › A"}
                    }
                }
            }"##,
        )
        .unwrap();

        let provider = StaticMeta::load(&path).unwrap();
        let page = provider.get_meta("/a", false).unwrap();
        assert_eq!(page.title, "A");
        assert_eq!(page.nav.alt.as_deref(), Some("Docs › A"));
    }

    #[test]
    fn malformed_metadata_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        fs::write(&path, "{broken").unwrap();

        let err = StaticMeta::load(&path).unwrap_err();
        assert!(matches!(err, ServerError::ParseMeta { .. }));
    }

    #[test]
    fn wrong_shaped_table_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        fs::write(&path, r#"{"pages": []}"#).unwrap();

        let err = StaticMeta::load(&path).unwrap_err();
        assert!(matches!(err, ServerError::ParseMeta { .. }));
    }
}
