//! Client-side search session state for docsearch.
//!
//! This crate owns the interactive side of the search subsystem:
//! - [`SearchSession`]: the query lifecycle state machine (status, open state,
//!   result collections, generation-guarded resolution, deep-link redirects)
//! - [`RecentSearchStore`]: the durable most-recent-first log of past
//!   successful selections
//! - [`SearchEvents`]: an injected analytics hook with a no-op default
//! - [`Preferences`]: process-wide theme/version state with change
//!   subscription
//!
//! The query engine itself lives in `docsearch-index`; the session only
//! orchestrates it.

#![warn(missing_docs)]

mod error;
mod events;
mod normalize;
mod prefs;
mod recent;
mod session;

pub use error::StoreError;
pub use events::{NoopEvents, SearchEvents};
pub use normalize::normalize_target;
pub use prefs::{PREFS_FILENAME, PrefChange, PrefKey, Preferences};
pub use recent::{MAX_RECENT_SEARCHES, RECENT_STORE_FILENAME, RecentSearchEntry, RecentSearchStore};
pub use session::{
    Collection, DismissOutcome, Navigation, QueryStatus, QueryTicket, Resolution, SearchSession,
};
