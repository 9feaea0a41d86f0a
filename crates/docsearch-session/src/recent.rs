//! Durable recent-search persistence.
//!
//! The store is a small JSON file holding past successful result selections,
//! most recent first. It is the only durable mutable state in the search
//! subsystem. Concurrent sessions sharing the file get last-writer-wins
//! semantics; no locking is attempted.
//!
//! Ids come from a `next_id` counter persisted alongside the entries, so they
//! stay unique across remove-then-add cycles. (The behavior this replaces
//! derived ids from the list length, which reuses ids after a removal.)

use std::{fs, path::PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// File name of the recent-search store.
pub const RECENT_STORE_FILENAME: &str = "recent-searches.json";

/// Directory name for docsearch data under the home directory.
const DATA_DIR: &str = ".docsearch";

/// Maximum number of entries retained; older entries are dropped.
pub const MAX_RECENT_SEARCHES: usize = 20;

/// A persisted record of a past successful result selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchEntry {
    /// Store-unique, monotonically increasing id.
    pub id: u64,
    /// Normalized destination URL.
    pub url: String,
    /// Title of the selected section.
    pub title: String,
    /// Title of the containing page.
    #[serde(rename = "pageTitle")]
    pub page_title: String,
    /// The query string that produced the selection.
    pub label: String,
}

/// On-disk shape of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Next id to assign; never decreases.
    next_id: u64,
    /// Entries, most recent first.
    entries: Vec<RecentSearchEntry>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// The durable most-recent-first log of recent searches.
#[derive(Debug)]
pub struct RecentSearchStore {
    /// Path of the backing JSON file.
    path: PathBuf,
    /// In-memory copy of the store contents.
    data: StoreData,
}

impl RecentSearchStore {
    /// Opens the store at an explicit path.
    ///
    /// A missing file loads as an empty store; a present but unparsable file
    /// is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let data = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            StoreData::default()
        };

        Ok(Self { path, data })
    }

    /// Opens the store at its default location (`~/.docsearch/recent-searches.json`).
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn open_default() -> Option<Result<Self, StoreError>> {
        Self::default_path().map(Self::open)
    }

    /// Returns the default store path, if the home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(DATA_DIR).join(RECENT_STORE_FILENAME))
    }

    /// Records a selection, assigning the next id and placing it first.
    ///
    /// An existing entry with the same `url` and `label` is replaced rather
    /// than duplicated. The log is truncated to [`MAX_RECENT_SEARCHES`].
    pub fn add(
        &mut self,
        url: &str,
        title: &str,
        page_title: &str,
        label: &str,
    ) -> Result<&RecentSearchEntry, StoreError> {
        self.data
            .entries
            .retain(|e| !(e.url == url && e.label == label));

        let entry = RecentSearchEntry {
            id: self.data.next_id,
            url: url.to_string(),
            title: title.to_string(),
            page_title: page_title.to_string(),
            label: label.to_string(),
        };
        self.data.next_id += 1;

        self.data.entries.insert(0, entry);
        self.data.entries.truncate(MAX_RECENT_SEARCHES);

        self.save()?;
        Ok(&self.data.entries[0])
    }

    /// Removes the entry with the given id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.data.entries.len();
        self.data.entries.retain(|e| e.id != id);

        let removed = self.data.entries.len() != before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Removes all entries recorded under a query label, returning the count.
    ///
    /// Used to clear stale entries once their query no longer resolves.
    pub fn remove_by_label(&mut self, label: &str) -> Result<usize, StoreError> {
        let before = self.data.entries.len();
        self.data.entries.retain(|e| e.label != label);

        let removed = before - self.data.entries.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Returns all entries, most recent first.
    pub fn entries(&self) -> &[RecentSearchEntry] {
        &self.data.entries
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }

    /// Writes the store back to disk, creating parent directories as needed.
    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.data).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&self.path, contents)?;
        Ok(())
    }
}
