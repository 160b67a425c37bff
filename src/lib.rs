//! bytecache - A bounded in-memory byte cache
//!
//! Caches opaque byte payloads under string keys with per-item TTL
//! expiration and LRU eviction, bounded by item count and total byte size.
//! Ships with an example HTTP front wiring the cache into request handling.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, MemCache};
pub use config::Config;
pub use error::{CacheError, Result};
