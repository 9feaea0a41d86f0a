//! The read-only document index.

use std::{fs, path::Path};

use crate::{IndexEntry, IndexError};

/// The in-memory document index, built once and read-only afterwards.
///
/// The index is a flat list of [`IndexEntry`] values in site build order.
/// Insertion order matters: the query engine breaks score ties by it.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    /// Indexed entries in build order.
    entries: Vec<IndexEntry>,
}

impl DocumentIndex {
    /// Creates an index from pre-built entries.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// Loads an index from a JSON snapshot file (an array of entries).
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let contents = fs::read_to_string(path).map_err(|source| IndexError::ReadSnapshot {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<IndexEntry> =
            serde_json::from_str(&contents).map_err(|e| IndexError::ParseSnapshot {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self::from_entries(entries))
    }

    /// Returns the indexed entries in build order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Returns the number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn loads_snapshot_file() {
        let temp = TempDir::new().unwrap();
        let snapshot = temp.path().join("search-index.json");
        fs::write(
            &snapshot,
            r##"[
                {"url": "/a", "pageTitle": "A", "title": "A", "content": "widget"},
                {"url": "/b", "pageTitle": "B", "title": "B", "content": "other"}
            ]"##,
        )
        .unwrap();

        let index = DocumentIndex::load(&snapshot).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries()[0].url, "/a");
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = DocumentIndex::load(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, IndexError::ReadSnapshot { .. }));
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let temp = TempDir::new().unwrap();
        let snapshot = temp.path().join("bad.json");
        fs::write(&snapshot, "{not json").unwrap();

        let err = DocumentIndex::load(&snapshot).unwrap_err();
        assert!(matches!(err, IndexError::ParseSnapshot { .. }));
    }
}
