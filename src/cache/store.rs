//! Cache Store Module
//!
//! Plain key to entry map. Locking and expiry scheduling live in
//! [`TimedCache`](crate::cache::TimedCache); this type only knows how to
//! insert, look up and sweep.

use std::collections::HashMap;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage of timestamped entries.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// resetting its insertion time.
    pub fn insert(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the stored value, whatever its age.
    ///
    /// Expiry is the reaper's job; a present entry is always returned.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Remove Expired ==
    /// Removes every entry created on or before `cutoff`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self, cutoff: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(cutoff));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
