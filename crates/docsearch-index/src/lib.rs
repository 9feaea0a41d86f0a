//! In-memory documentation index and query engine for docsearch.
//!
//! This crate provides the search core shared by the interactive session and
//! the HTTP endpoint:
//! - [`IndexEntry`]: one searchable text unit tied to a page and optional anchor
//! - [`DocumentIndex`]: the read-only index built once from a JSON snapshot
//! - [`DocumentIndex::search`]: scored, field-restricted matching
//! - [`reconcile`]: post-scoring deduplication down to one result per page/anchor
//!
//! # Example
//!
//! ```
//! use docsearch_index::{DocumentIndex, IndexEntry, SearchField, SearchOptions, reconcile};
//!
//! let index = DocumentIndex::from_entries(vec![IndexEntry {
//!     url: "/guide".to_string(),
//!     page_title: "Guide".to_string(),
//!     title: "Guide".to_string(),
//!     content: "widget configuration".to_string(),
//! }]);
//!
//! let hits = index.search(
//!     "widget",
//!     &[SearchField::Title, SearchField::Content],
//!     &SearchOptions::default(),
//! );
//! let results = reconcile(hits);
//! assert_eq!(results.len(), 1);
//! ```

#![warn(missing_docs)]

mod engine;
mod entry;
mod error;
mod index;
mod reconcile;
mod result;

pub use engine::{DEFAULT_LIMIT, SearchField, SearchOptions};
pub use entry::IndexEntry;
pub use error::IndexError;
pub use index::DocumentIndex;
pub use reconcile::reconcile;
pub use result::{SearchResult, split_url};
