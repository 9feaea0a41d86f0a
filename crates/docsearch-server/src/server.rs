//! The axum application serving the query endpoint.
//!
//! Each request is handled independently and statelessly; the only shared
//! state is the read-only document index and metadata tables. Malformed
//! `limit`/`offset` values fall back to their defaults; any failure while
//! shaping results aborts the request with a single 400 error body.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use docsearch_index::{DEFAULT_LIMIT, DocumentIndex, SearchField, SearchOptions, reconcile};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::{MetaProvider, ServerConfig, ServerError, ShapedResult, shape_results};

/// Fields the HTTP endpoint searches.
const ENDPOINT_FIELDS: &[SearchField] = &[SearchField::Title, SearchField::Content];

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The read-only document index.
    index: Arc<DocumentIndex>,
    /// The page metadata collaborator.
    meta: Arc<dyn MetaProvider + Send + Sync>,
    /// Endpoint configuration.
    config: Arc<ServerConfig>,
}

/// Raw query parameters as received; parsing happens with fallbacks.
#[derive(Debug, Default, Deserialize)]
struct RawParams {
    /// Free-text query.
    query: Option<String>,
    /// Result limit, base-10.
    limit: Option<String>,
    /// Result offset, base-10.
    offset: Option<String>,
}

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Number of results returned.
    pub total: usize,
    /// Shaped results in rank order.
    pub results: Vec<ShapedResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable failure message.
    error: String,
}

/// Builds the application router.
pub fn router(
    index: Arc<DocumentIndex>,
    meta: Arc<dyn MetaProvider + Send + Sync>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        index,
        meta,
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/search", get(handle_search))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Runs the query endpoint until the server exits.
pub async fn run_server(
    index: Arc<DocumentIndex>,
    meta: Arc<dyn MetaProvider + Send + Sync>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let addr = config.addr.clone();
    let app = router(index, meta, config);

    info!("starting search endpoint on {addr}");

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Serve {
            addr: addr.clone(),
            source,
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|source| ServerError::Serve { addr, source })?;

    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Handles `GET /api/search`.
async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<RawParams>,
) -> impl IntoResponse {
    match execute_search(&state, &params) {
        Ok(response) => {
            debug!(
                total = response.total,
                query = params.query.as_deref().unwrap_or(""),
                "search request served"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("search request failed: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Runs the full pipeline for one request: engine, reconciler, shaping.
fn execute_search(state: &AppState, params: &RawParams) -> Result<SearchResponse, ServerError> {
    let query = params.query.as_deref().unwrap_or("");
    let options = SearchOptions::default()
        .with_limit(parse_count(params.limit.as_deref(), DEFAULT_LIMIT))
        .with_offset(parse_count(params.offset.as_deref(), 0));

    let candidates = state.index.search(query, ENDPOINT_FIELDS, &options);
    let reconciled = reconcile(candidates);
    let results = shape_results(&reconciled, state.meta.as_ref(), &state.config)?;

    Ok(SearchResponse {
        total: results.len(),
        results,
    })
}

/// Parses a base-10 count, falling back to a default on absent or
/// non-numeric input.
fn parse_count(value: Option<&str>, default: usize) -> usize {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
