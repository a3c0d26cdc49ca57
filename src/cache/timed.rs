//! Timed Cache Module
//!
//! Thread-safe cache whose entries are purged by a background reaper once
//! they have lived for the eviction interval.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::cache::CacheStore;
use crate::tasks::spawn_reap_task;

// == Timed Cache ==
/// In-memory cache of opaque byte payloads with interval-based expiry.
///
/// Reads never check freshness. An entry stays readable until the reaper
/// sweeps it, so the worst-case staleness is just under twice the interval.
///
/// The reaper is stopped by [`TimedCache::close`] or when the cache is dropped.
#[derive(Debug)]
pub struct TimedCache {
    /// Shared storage, also held by the reaper
    store: Arc<Mutex<CacheStore>>,
    /// Stops the reaper
    shutdown: CancellationToken,
    /// Reaper handle, taken on close
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let shutdown = CancellationToken::new();
        let reaper = spawn_reap_task(store.clone(), interval, shutdown.clone());

        Self {
            store,
            shutdown,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamped with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let (key, value) = (key.into(), value.into());
        self.store.lock().await.insert(key, value);
    }

    // == Get ==
    /// Returns the stored value if the reaper has not yet removed it.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Close ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Idempotent. Entries already stored stay readable, but nothing is
    /// expired after the cache is closed.
    pub async fn close(&self) {
        self.shutdown.cancel();

        let handle = self.reaper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!("Cache reaper exited abnormally: {}", err);
            }
        }
    }

    // == Is Closed ==
    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for TimedCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
