//! Analytics event hook.
//!
//! The session reports a small set of interaction events through an injected
//! collaborator rather than calling an ambient global. Hosts that do not care
//! use [`NoopEvents`].

/// Receiver for search interaction events.
///
/// All methods default to no-ops so implementors can pick the events they
/// care about.
pub trait SearchEvents {
    /// The session's query text changed.
    fn query_changed(&self, _query: &str) {}

    /// A result was selected.
    fn result_selected(&self, _title: &str) {}
}

/// The default, do-nothing event receiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl SearchEvents for NoopEvents {}
