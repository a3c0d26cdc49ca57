//! Cache Entry Module
//!
//! Defines a single cached payload together with its insertion time.

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached value plus the instant it was inserted.
///
/// Entries are never mutated; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// Insertion time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Expired At ==
    /// Checks whether the entry falls on or before the reap cutoff.
    ///
    /// Boundary condition: an entry created exactly at `cutoff` has lived
    /// the full interval and is expired, matching `now - created_at < interval`
    /// as the freshness condition.
    pub fn is_expired_at(&self, cutoff: Instant) -> bool {
        self.created_at <= cutoff
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"test_value"));

        assert_eq!(entry.value, Bytes::from_static(b"test_value"));
        assert_eq!(entry.created_at, Instant::now());
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_expired_at() {
        let entry = CacheEntry::new(Bytes::from_static(b"v"));

        tokio::time::advance(Duration::from_secs(3)).await;
        let now = Instant::now();

        // Created 3s ago: expired for a 2s interval, fresh for a 5s one
        assert!(entry.is_expired_at(now - Duration::from_secs(2)));
        assert!(!entry.is_expired_at(now - Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(Bytes::from_static(b"v"));

        assert!(entry.is_expired_at(entry.created_at), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(entry.created_at - Duration::from_millis(1)));
    }
}
