//! Cache Module
//!
//! Provides a bounded in-memory byte cache with TTL expiration and LRU
//! eviction, behind the [`Cache`] capability set.

use std::time::Duration;

use crate::error::Result;

mod entry;
mod list;
mod stats;
mod store;


// Re-export public types
pub use entry::CachedItem;
pub use list::RecencyList;
pub use stats::CacheStats;
pub use store::MemCache;

// == Public Constants ==
/// Default item-count ceiling (~256K items)
pub const DEFAULT_MAX_ITEMS: usize = 64 * 1024 * 4;

/// Default byte-size ceiling for stored payloads
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024 * 1024; // 64 MiB

// == Cache Trait ==
/// The capability set a cache backend provides: fetch, set, delete.
///
/// [`MemCache`] is the in-process implementation; a remote or distributed
/// backend can substitute for it without touching the callers.
///
/// All three operations take `&mut self`: even a read reorders the
/// recency tracking, so callers synchronize through a single exclusive
/// lock per instance.
pub trait Cache {
    /// Retrieves a copy of the payload stored under `key`.
    ///
    /// Fails with `NotFound` when the key was never stored, was deleted,
    /// has expired, or has been evicted; the causes are indistinguishable
    /// to the caller.
    fn fetch(&mut self, key: &str) -> Result<Vec<u8>>;

    /// Stores `payload` under `key`, expiring `ttl` from now.
    fn set(&mut self, key: String, payload: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Removes `key`. Deleting an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<()>;
}
