//! The interactive query lifecycle state machine.
//!
//! A session owns the current query, its status, the visible result
//! collections, and the recent-search store. Query resolution is
//! generation-guarded: every query change bumps a generation counter and
//! returns a [`QueryTicket`]; a resolution applies only while its ticket's
//! generation is still current, so a new query supersedes (rather than queues
//! behind) any in-flight one and late stale responses are dropped.
//!
//! The session performs no navigation itself. Selection and deep-link
//! redirects return a [`Navigation`] target for the host to act on.

use docsearch_index::{DocumentIndex, SearchField, SearchOptions, SearchResult, reconcile};

use crate::{
    NoopEvents, RecentSearchEntry, RecentSearchStore, SearchEvents, StoreError, normalize_target,
};

/// Fields the interactive session searches.
const SESSION_FIELDS: &[SearchField] = &[SearchField::Title, SearchField::Content];

/// Lifecycle status of the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No query in flight.
    Idle,
    /// A query was submitted and has not resolved yet.
    Loading,
    /// The pending query exceeded the latency threshold. Purely a
    /// presentation signal; no new request is issued.
    Stalled,
    /// The last resolution failed.
    Error,
}

/// A named result group produced by one logical source.
#[derive(Debug, Clone)]
pub enum Collection {
    /// Results from the main document search.
    Documentation(Vec<SearchResult>),
    /// Entries replayed from the recent-search store.
    Recent(Vec<RecentSearchEntry>),
}

/// Proof of a query submission, used to guard its eventual resolution.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    /// Generation at submission time.
    generation: u64,
    /// The submitted query text.
    query: String,
}

impl QueryTicket {
    /// Returns the submitted query text.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// A navigation target produced by selecting a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Normalized destination URL.
    pub url: String,
}

/// Outcome of applying a resolution to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The ticket was superseded; nothing was applied.
    Stale,
    /// Results were applied to the session's collections.
    Applied,
    /// A deep-link query resolved; the host should navigate immediately.
    Redirect(Navigation),
}

/// Outcome of the dismiss key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// The session was collapsed.
    Closed,
    /// The key should be forwarded to normal input handling.
    Forwarded,
}

/// The client-side search session.
pub struct SearchSession {
    /// Current input string.
    query: String,
    /// Lifecycle status of the current query.
    status: QueryStatus,
    /// Whether the session dialog is shown at all.
    active: bool,
    /// Whether the result panel is visible.
    is_open: bool,
    /// Ordered result groups, one per logical source.
    collections: Vec<Collection>,
    /// Monotonically increasing query generation.
    generation: u64,
    /// Generation of a pending deep-link query, if any.
    deep_link_generation: Option<u64>,
    /// Durable recent-search log.
    store: RecentSearchStore,
    /// Injected analytics hook.
    events: Box<dyn SearchEvents>,
}

impl SearchSession {
    /// Creates a session over a recent-search store with no analytics.
    pub fn new(store: RecentSearchStore) -> Self {
        Self::with_events(store, Box::new(NoopEvents))
    }

    /// Creates a session with an injected analytics hook.
    pub fn with_events(store: RecentSearchStore, events: Box<dyn SearchEvents>) -> Self {
        Self {
            query: String::new(),
            status: QueryStatus::Idle,
            active: false,
            is_open: false,
            collections: Vec::new(),
            generation: 0,
            deep_link_generation: None,
            store,
            events,
        }
    }

    /// Returns the current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the current query status.
    pub fn status(&self) -> QueryStatus {
        self.status
    }

    /// Returns true if the result panel is visible.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns true if the session dialog is shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current result collections.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Returns the documentation results of the current collections, if any.
    pub fn documentation_results(&self) -> Option<&[SearchResult]> {
        self.collections.iter().find_map(|c| match c {
            Collection::Documentation(items) => Some(items.as_slice()),
            Collection::Recent(_) => None,
        })
    }

    /// Returns the underlying recent-search store.
    pub fn store(&self) -> &RecentSearchStore {
        &self.store
    }

    /// Updates the query, superseding any in-flight resolution.
    ///
    /// A non-empty query opens the panel, moves to `Loading`, and returns a
    /// ticket for the caller to resolve. An empty query clears displayed
    /// state, leaving only the recent-search collection.
    pub fn set_query(&mut self, query: &str) -> Option<QueryTicket> {
        self.events.query_changed(query);
        self.query = query.to_string();
        self.generation += 1;

        if query.trim().is_empty() {
            self.is_open = false;
            self.status = QueryStatus::Idle;
            self.collections = vec![Collection::Recent(self.store.entries().to_vec())];
            return None;
        }

        self.active = true;
        self.is_open = true;
        self.status = QueryStatus::Loading;
        Some(QueryTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Opens the session with an externally supplied query (the URL `q`
    /// parameter).
    ///
    /// When the returned ticket resolves with at least one documentation
    /// result, the session auto-navigates to the first result instead of
    /// waiting for user interaction.
    pub fn open_deep_link(&mut self, query: &str) -> Option<QueryTicket> {
        let ticket = self.set_query(query)?;
        self.deep_link_generation = Some(ticket.generation);
        Some(ticket)
    }

    /// Marks the pending query as stalled.
    ///
    /// Driven by the host's clock once resolution exceeds its latency
    /// threshold. No-op unless a query is loading.
    pub fn mark_stalled(&mut self) {
        if self.status == QueryStatus::Loading {
            self.status = QueryStatus::Stalled;
        }
    }

    /// Resolves a ticket against the index and applies the outcome.
    pub fn resolve(
        &mut self,
        ticket: &QueryTicket,
        index: &DocumentIndex,
    ) -> Result<Resolution, StoreError> {
        let candidates = index.search(&ticket.query, SESSION_FIELDS, &SearchOptions::default());
        self.apply_results(ticket, reconcile(candidates))
    }

    /// Applies resolved results if the ticket is still current.
    ///
    /// Stale tickets are discarded without touching session state. An empty
    /// result set removes any recent-search entry recorded under the same
    /// query label, keeping the recent list free of entries that no longer
    /// resolve.
    pub fn apply_results(
        &mut self,
        ticket: &QueryTicket,
        results: Vec<SearchResult>,
    ) -> Result<Resolution, StoreError> {
        if ticket.generation != self.generation {
            return Ok(Resolution::Stale);
        }

        if results.is_empty() {
            self.store.remove_by_label(&ticket.query)?;
        }

        let redirect_target = if self.deep_link_generation == Some(ticket.generation) {
            results.first().cloned()
        } else {
            None
        };
        self.deep_link_generation = None;

        self.collections = vec![
            Collection::Documentation(results),
            Collection::Recent(self.store.entries().to_vec()),
        ];
        self.status = QueryStatus::Idle;

        match redirect_target {
            Some(first) => Ok(Resolution::Redirect(self.select(&first)?)),
            None => Ok(Resolution::Applied),
        }
    }

    /// Marks the current query as failed if the ticket is still current.
    pub fn apply_error(&mut self, ticket: &QueryTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.status = QueryStatus::Error;
        true
    }

    /// Selects a result: records it in the recent-search store under the
    /// current query label and returns the normalized navigation target.
    pub fn select(&mut self, result: &SearchResult) -> Result<Navigation, StoreError> {
        let target = normalize_target(&result.url).to_string();
        let label = self.query.clone();
        self.store
            .add(&target, &result.title, &result.page_title, &label)?;
        self.events.result_selected(&result.title);
        Ok(Navigation { url: target })
    }

    /// Removes a recent-search entry by id (explicit user removal).
    pub fn remove_recent(&mut self, id: u64) -> Result<bool, StoreError> {
        let removed = self.store.remove(id)?;
        if removed {
            self.collections = vec![Collection::Recent(self.store.entries().to_vec())];
        }
        Ok(removed)
    }

    /// Closes the session and clears displayed state. Idempotent.
    pub fn close(&mut self) {
        self.query.clear();
        self.collections.clear();
        self.status = QueryStatus::Idle;
        self.is_open = false;
        self.active = false;
        self.deep_link_generation = None;
        // Supersede any in-flight resolution.
        self.generation += 1;
    }

    /// Handles the open shortcut. Active only while the session is closed;
    /// returns whether the key was consumed.
    pub fn handle_open_shortcut(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.collections = vec![Collection::Recent(self.store.entries().to_vec())];
        true
    }

    /// Handles the dismiss key: collapses the session only when it holds no
    /// query, otherwise the key belongs to normal input handling.
    pub fn handle_dismiss(&mut self) -> DismissOutcome {
        if self.query.is_empty() {
            self.close();
            DismissOutcome::Closed
        } else {
            DismissOutcome::Forwarded
        }
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use docsearch_index::IndexEntry;
    use tempfile::TempDir;

    use super::*;

    fn index() -> DocumentIndex {
        DocumentIndex::from_entries(vec![
            IndexEntry {
                url: "/a".to_string(),
                page_title: "A".to_string(),
                title: "A".to_string(),
                content: "widget".to_string(),
            },
            IndexEntry {
                url: "/topic-2".to_string(),
                page_title: "Topic".to_string(),
                title: "Topic".to_string(),
                content: "gadget".to_string(),
            },
        ])
    }

    fn session(temp: &TempDir) -> SearchSession {
        let store = RecentSearchStore::open(temp.path().join("recent.json")).unwrap();
        SearchSession::new(store)
    }

    #[test]
    fn query_submission_moves_to_loading_and_opens_panel() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);

        let ticket = session.set_query("widget").unwrap();
        assert_eq!(session.status(), QueryStatus::Loading);
        assert!(session.is_open());
        assert_eq!(ticket.query(), "widget");
    }

    #[test]
    fn resolution_populates_one_collection_per_source() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        let ticket = session.set_query("widget").unwrap();
        let outcome = session.resolve(&ticket, &index).unwrap();

        assert_eq!(outcome, Resolution::Applied);
        assert_eq!(session.status(), QueryStatus::Idle);
        assert_eq!(session.collections().len(), 2);
        assert_eq!(session.documentation_results().unwrap().len(), 1);
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        let stale = session.set_query("widget").unwrap();
        let fresh = session.set_query("gadget").unwrap();

        assert_eq!(session.resolve(&stale, &index).unwrap(), Resolution::Stale);

        let outcome = session.resolve(&fresh, &index).unwrap();
        assert_eq!(outcome, Resolution::Applied);
        let results = session.documentation_results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].page_title, "Topic");
    }

    #[test]
    fn stalled_is_a_presentation_signal_only() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        let ticket = session.set_query("widget").unwrap();
        session.mark_stalled();
        assert_eq!(session.status(), QueryStatus::Stalled);

        // The same pending ticket still resolves.
        assert_eq!(
            session.resolve(&ticket, &index).unwrap(),
            Resolution::Applied
        );
        assert_eq!(session.status(), QueryStatus::Idle);
    }

    #[test]
    fn selection_normalizes_target_and_records_recent_entry() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        let ticket = session.set_query("gadget").unwrap();
        session.resolve(&ticket, &index).unwrap();

        let result = session.documentation_results().unwrap()[0].clone();
        assert_eq!(result.url, "/topic-2");

        let nav = session.select(&result).unwrap();
        assert_eq!(nav.url, "/topic");
        assert_eq!(session.store().entries()[0].url, "/topic");
        assert_eq!(session.store().entries()[0].label, "gadget");
    }

    #[test]
    fn empty_result_set_removes_stale_recent_entry() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        // Record an entry under the label, then resolve the same label to
        // nothing.
        let ticket = session.set_query("widget").unwrap();
        session.resolve(&ticket, &index).unwrap();
        let result = session.documentation_results().unwrap()[0].clone();
        session.select(&result).unwrap();
        assert_eq!(session.store().len(), 1);

        let empty_index = DocumentIndex::from_entries(Vec::new());
        let ticket = session.set_query("widget").unwrap();
        session.resolve(&ticket, &empty_index).unwrap();

        assert!(session.store().is_empty());
    }

    #[test]
    fn deep_link_auto_navigates_to_first_result() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        let ticket = session.open_deep_link("gadget").unwrap();
        let outcome = session.resolve(&ticket, &index).unwrap();

        match outcome {
            Resolution::Redirect(nav) => assert_eq!(nav.url, "/topic"),
            other => panic!("expected redirect, got {other:?}"),
        }
        // The redirect was recorded like a manual selection.
        assert_eq!(session.store().entries()[0].label, "gadget");
    }

    #[test]
    fn deep_link_with_no_results_does_not_redirect() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);

        let ticket = session.open_deep_link("nonexistent").unwrap();
        let outcome = session
            .resolve(&ticket, &DocumentIndex::from_entries(Vec::new()))
            .unwrap();

        assert_eq!(outcome, Resolution::Applied);
    }

    #[test]
    fn superseded_deep_link_does_not_redirect() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);
        let index = index();

        let stale = session.open_deep_link("gadget").unwrap();
        let fresh = session.set_query("widget").unwrap();

        assert_eq!(session.resolve(&stale, &index).unwrap(), Resolution::Stale);
        // The typed query resolves normally, not as a redirect.
        assert_eq!(
            session.resolve(&fresh, &index).unwrap(),
            Resolution::Applied
        );
    }

    #[test]
    fn close_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);

        session.set_query("widget");
        session.close();
        assert!(!session.is_open());
        assert!(session.query().is_empty());
        assert_eq!(session.status(), QueryStatus::Idle);

        session.close();
        assert!(!session.is_open());
        assert!(session.collections().is_empty());
    }

    #[test]
    fn empty_query_clears_displayed_state() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);

        session.set_query("widget");
        assert!(session.set_query("").is_none());
        assert!(!session.is_open());
        assert_eq!(session.status(), QueryStatus::Idle);
    }

    #[test]
    fn open_shortcut_is_inert_while_open() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);

        assert!(session.handle_open_shortcut());
        assert!(!session.handle_open_shortcut());

        session.close();
        assert!(session.handle_open_shortcut());
    }

    #[test]
    fn dismiss_closes_only_without_a_query() {
        let temp = TempDir::new().unwrap();
        let mut session = session(&temp);

        session.handle_open_shortcut();
        session.set_query("widget");
        assert_eq!(session.handle_dismiss(), DismissOutcome::Forwarded);
        assert!(session.is_active());

        session.set_query("");
        assert_eq!(session.handle_dismiss(), DismissOutcome::Closed);
        assert!(!session.is_active());
    }

    #[test]
    fn events_fire_on_input_and_selection() {
        /// Test hook collecting fired event names.
        #[derive(Default)]
        struct Recorder(Rc<RefCell<Vec<String>>>);

        impl SearchEvents for Recorder {
            fn query_changed(&self, query: &str) {
                self.0.borrow_mut().push(format!("query:{query}"));
            }
            fn result_selected(&self, title: &str) {
                self.0.borrow_mut().push(format!("select:{title}"));
            }
        }

        let temp = TempDir::new().unwrap();
        let store = RecentSearchStore::open(temp.path().join("recent.json")).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut session = SearchSession::with_events(store, Box::new(Recorder(Rc::clone(&log))));
        let index = index();

        let ticket = session.set_query("widget").unwrap();
        session.resolve(&ticket, &index).unwrap();
        let result = session.documentation_results().unwrap()[0].clone();
        session.select(&result).unwrap();

        let events = log.borrow();
        assert_eq!(events.as_slice(), ["query:widget", "select:A"]);
    }
}
