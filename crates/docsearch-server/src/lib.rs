//! HTTP query endpoint for docsearch.
//!
//! Exposes the query engine and result reconciler over a stateless
//! request/response boundary for external and programmatic search:
//! - [`router`]/[`run_server`]: the axum application (`GET /api/search`,
//!   `GET /health`)
//! - [`MetaProvider`]: the page metadata collaborator used to enrich results
//! - result shaping: absolute URLs, embed links, deprecation flags, keyword
//!   breadcrumbs, first-sentence snippets; internal ranking fields never
//!   cross this boundary

#![warn(missing_docs)]

mod config;
mod error;
mod meta;
mod server;
mod shape;

pub use config::{DEFAULT_ADDR, DEFAULT_BASE_URL, DEPRECATED_PREFIX, ServerConfig};
pub use error::ServerError;
pub use meta::{MetaProvider, NavMeta, PageMeta, StaticMeta};
pub use server::{SearchResponse, router, run_server};
pub use shape::{ShapedResult, shape_results};
