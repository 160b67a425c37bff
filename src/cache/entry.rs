//! Cached Item Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cached Item ==
/// Represents a single stored entry: key, opaque payload, and expiry.
///
/// The payload is an uninterpreted byte sequence; the cache never looks
/// inside it. The key is carried here as well so that evicting the tail of
/// the recency list can unmap the entry from the index.
#[derive(Debug, Clone)]
pub struct CachedItem {
    /// The key this entry is stored under
    pub key: String,
    /// The stored payload bytes
    pub payload: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CachedItem {
    // == Constructor ==
    /// Creates a new item expiring `ttl` from now.
    ///
    /// A zero `ttl` produces an item that is already expired.
    pub fn new(key: String, payload: Vec<u8>, ttl: Duration) -> Self {
        Self {
            key,
            payload,
            expires_at: expiry_timestamp(ttl),
        }
    }

    // == Refresh ==
    /// Replaces the payload and restarts the TTL in place.
    ///
    /// Used when `set` hits an existing key: the item keeps its identity
    /// (and its slot in the recency list), only its contents change.
    pub fn refresh(&mut self, payload: Vec<u8>, ttl: Duration) {
        self.payload = payload;
        self.expires_at = expiry_timestamp(ttl);
    }

    // == Is Expired ==
    /// Checks if the item has expired.
    ///
    /// Boundary condition: an item is expired once the current time is
    /// greater than or equal to the expiration time, so a zero-TTL item is
    /// invisible to the very next fetch even within the same millisecond.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns the absolute expiry timestamp for a TTL starting now.
fn expiry_timestamp(ttl: Duration) -> u64 {
    current_timestamp_ms().saturating_add(ttl.as_millis().min(u64::MAX as u128) as u64)
}

/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_item_creation() {
        let item = CachedItem::new(
            "greeting".to_string(),
            b"hello".to_vec(),
            Duration::from_secs(60),
        );

        assert_eq!(item.key, "greeting");
        assert_eq!(item.payload, b"hello");
        assert!(!item.is_expired());
    }

    #[test]
    fn test_item_zero_ttl_is_expired() {
        let item = CachedItem::new("k".to_string(), b"v".to_vec(), Duration::ZERO);
        assert!(item.is_expired());
    }

    #[test]
    fn test_item_expiration_elapses() {
        let item = CachedItem::new("k".to_string(), b"v".to_vec(), Duration::from_millis(50));

        assert!(!item.is_expired());
        sleep(Duration::from_millis(80));
        assert!(item.is_expired());
    }

    #[test]
    fn test_refresh_replaces_payload_and_restarts_ttl() {
        let mut item = CachedItem::new("k".to_string(), b"old".to_vec(), Duration::ZERO);
        assert!(item.is_expired());

        item.refresh(b"new".to_vec(), Duration::from_secs(60));

        assert_eq!(item.payload, b"new");
        assert!(!item.is_expired());
        assert_eq!(item.key, "k");
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let item = CachedItem {
            key: "k".to_string(),
            payload: b"v".to_vec(),
            // Expires exactly now
            expires_at: current_timestamp_ms(),
        };

        assert!(item.is_expired(), "Item should be expired at boundary");
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let item = CachedItem::new("k".to_string(), b"v".to_vec(), Duration::MAX);
        assert!(!item.is_expired());
        assert_eq!(item.expires_at, u64::MAX);
    }
}
