//! Cache Store Module
//!
//! Main cache engine combining a key index with a recency list, enforcing
//! item-count and byte-size limits with LRU eviction and lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{Cache, CacheStats, CachedItem, RecencyList};
use crate::error::{CacheError, Result};

// == Mem Cache ==
/// In-memory implementation of the [`Cache`] capability set.
///
/// Two structures are kept in lockstep: the `index` maps each key to a slot
/// in the `list`, and the `list` orders the items by recency (front = most
/// recently touched, back = next eviction candidate). A key is present in
/// one structure if and only if it is present in the other.
///
/// The engine itself is not synchronized; embedders wrap an instance in a
/// single exclusive lock (e.g. `Arc<RwLock<MemCache>>`) and take it in
/// write mode for every operation, since even `fetch` reorders the list.
#[derive(Debug)]
pub struct MemCache {
    /// Key to recency-list slot mapping
    index: HashMap<String, usize>,
    /// Items ordered by recency of touch
    list: RecencyList,
    /// Maximum number of items allowed
    max_items: usize,
    /// Maximum total payload size allowed, in bytes
    max_bytes: usize,
    /// Running sum of stored payload lengths
    current_bytes: usize,
    /// Performance statistics
    stats: CacheStats,
}

impl MemCache {
    // == Constructor ==
    /// Creates a new MemCache with the given capacity limits.
    ///
    /// Both limits trigger eviction independently: exceeding either one
    /// removes least recently used items until both hold again.
    ///
    /// A zero `max_items` is clamped to one, since eviction never reduces
    /// the cache below one remaining item.
    ///
    /// # Arguments
    /// * `max_items` - Maximum number of items the cache can hold
    /// * `max_bytes` - Maximum total payload size in bytes
    pub fn new(max_items: usize, max_bytes: usize) -> Self {
        Self {
            index: HashMap::new(),
            list: RecencyList::new(),
            max_items: max_items.max(1),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::new(),
        }
    }

    // == Length ==
    /// Returns the current number of stored items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Current Bytes ==
    /// Returns the current sum of stored payload lengths.
    pub fn current_bytes(&self) -> usize {
        self.current_bytes
    }

    /// Returns the configured item-count ceiling.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Returns the configured byte-size ceiling.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.index.len(), self.current_bytes);
        stats
    }

    // == Internal Helpers ==
    /// Removes the item at `slot` from both structures and settles the
    /// byte accounting.
    fn drop_slot(&mut self, slot: usize) {
        if let Some(item) = self.list.remove(slot) {
            self.index.remove(&item.key);
            self.current_bytes -= item.payload.len();
        }
    }

    /// Evicts from the tail until both capacity limits hold.
    ///
    /// Stops once a single item remains: a lone payload larger than
    /// `max_bytes` is admitted and kept rather than bouncing the cache
    /// down to empty.
    fn evict_to_capacity(&mut self) {
        while self.list.len() > self.max_items || self.current_bytes > self.max_bytes {
            if self.list.len() <= 1 {
                break;
            }
            let Some(slot) = self.list.back() else { break };
            self.drop_slot(slot);
            self.stats.record_eviction();
        }
    }

    /// Verifies the index/list pairing and byte accounting.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(
            self.index.len(),
            self.list.len(),
            "index and recency list disagree on item count"
        );

        let mut bytes = 0;
        for item in self.list.iter() {
            let slot = self
                .index
                .get(&item.key)
                .unwrap_or_else(|| panic!("listed key {:?} missing from index", item.key));
            assert_eq!(
                self.list.get(*slot).map(|i| i.key.as_str()),
                Some(item.key.as_str()),
                "index slot does not point back at the listed item"
            );
            bytes += item.payload.len();
        }
        assert_eq!(bytes, self.current_bytes, "current_bytes drifted");
    }
}

impl Default for MemCache {
    fn default() -> Self {
        Self::new(crate::cache::DEFAULT_MAX_ITEMS, crate::cache::DEFAULT_MAX_BYTES)
    }
}

impl Cache for MemCache {
    // == Fetch ==
    /// Retrieves a copy of the payload stored under `key`.
    ///
    /// A successful fetch marks the item most recently used. An expired
    /// item is removed on discovery (lazy expiration) and reported the
    /// same way as a missing one: `NotFound`.
    fn fetch(&mut self, key: &str) -> Result<Vec<u8>> {
        let Some(&slot) = self.index.get(key) else {
            self.stats.record_miss();
            return Err(CacheError::NotFound(key.to_string()));
        };

        let payload = match self.list.get(slot) {
            Some(item) if !item.is_expired() => item.payload.clone(),
            _ => {
                self.drop_slot(slot);
                self.stats.record_miss();
                return Err(CacheError::NotFound(key.to_string()));
            }
        };

        self.list.move_to_front(slot);
        self.stats.record_hit();
        Ok(payload)
    }

    // == Set ==
    /// Stores `payload` under `key`, expiring `ttl` from now.
    ///
    /// An existing item is updated in place: its slot in the recency list
    /// is kept, the byte total is adjusted by the signed size difference,
    /// and the TTL restarts. A new item is inserted at the front. Either
    /// way the item ends up most recently used and the capacity limits are
    /// enforced before returning.
    ///
    /// A zero `ttl` stores an item that is already expired. Never fails.
    fn set(&mut self, key: String, payload: Vec<u8>, ttl: Duration) -> Result<()> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(item) = self.list.get_mut(slot) {
                self.current_bytes -= item.payload.len();
                self.current_bytes += payload.len();
                item.refresh(payload, ttl);
            }
            self.list.move_to_front(slot);
        } else {
            self.current_bytes += payload.len();
            let slot = self.list.push_front(CachedItem::new(key.clone(), payload, ttl));
            self.index.insert(key, slot);
        }

        self.evict_to_capacity();
        Ok(())
    }

    // == Delete ==
    /// Removes `key` from the cache. Deleting an absent key is not an
    /// error; the call is idempotent.
    fn delete(&mut self, key: &str) -> Result<()> {
        if let Some(slot) = self.index.remove(key) {
            if let Some(item) = self.list.remove(slot) {
                self.current_bytes -= item.payload.len();
            }
        }
        Ok(())
    }
}
