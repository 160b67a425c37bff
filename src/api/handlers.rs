//! API Handlers
//!
//! HTTP request handlers wiring the cache engine into request handling.
//!
//! The HTTP layer owns all caching policy: the request path identifier is
//! used directly as the cache key, the raw request body is the payload,
//! and a fixed default TTL from the configuration applies to every write.
//! The engine itself knows nothing about any of this.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::{Cache, MemCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// One cache instance per server, behind the single exclusive lock the
/// engine's concurrency model calls for. The lock is read-write capable,
/// but every path that touches an item takes it in write mode, since even
/// a fetch reorders the recency list.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache engine
    pub cache: Arc<RwLock<MemCache>>,
    /// TTL applied to every stored payload
    pub default_ttl: Duration,
}

impl AppState {
    /// Creates a new AppState around the given cache engine.
    pub fn new(cache: MemCache, default_ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            default_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = MemCache::new(config.max_items, config.max_bytes);
        Self::new(cache, Duration::from_secs(config.default_ttl))
    }
}

/// Handler for GET /cache/:key
///
/// Returns the raw payload bytes stored under the path key, or 404 if no
/// usable value is available (missing, deleted, expired, or evicted — the
/// caller cannot tell which, and is expected to repopulate from the
/// authoritative source).
pub async fn fetch_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Vec<u8>> {
    // Write lock: a successful fetch refreshes the recency position
    let mut cache = state.cache.write().await;
    cache.fetch(&key)
}

/// Handler for PUT /cache/:key
///
/// Stores the raw request body under the path key with the configured
/// default TTL. Storing never fails; an oversized body simply displaces
/// everything else.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<StatusCode> {
    let mut cache = state.cache.write().await;
    cache.set(key, body.to_vec(), state.default_ttl)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /cache/:key
///
/// Removes the key from the cache. Deleting an absent key succeeds too.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode> {
    let mut cache = state.cache.write().await;
    cache.delete(&key)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough: stats never touch the recency list
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
