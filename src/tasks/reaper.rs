//! Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest period the reaper will tick at, so a zero interval cannot spin.
const MIN_REAP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// On each tick the task computes `cutoff = now - interval` and removes every
/// entry created on or before it. The store lock is held only for the sweep.
/// The task exits once `shutdown` is cancelled.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let shutdown = CancellationToken::new();
/// let handle = spawn_reap_task(store.clone(), Duration::from_secs(5), shutdown.clone());
/// // Later:
/// shutdown.cancel();
/// handle.await?;
/// ```
pub fn spawn_reap_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let period = interval.max(MIN_REAP_PERIOD);
    // Anchored at spawn time, not at the task's first poll
    let start = Instant::now();

    tokio::spawn(async move {
        debug!(?interval, "Starting cache reaper");

        let mut deadline = start.checked_add(period);

        loop {
            // An interval past the clock's range never elapses
            let Some(at) = deadline else {
                shutdown.cancelled().await;
                debug!("Cache reaper stopped");
                break;
            };

            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Cache reaper stopped");
                    break;
                }
                _ = time::sleep_until(at) => {}
            }

            let now = Instant::now();
            deadline = next_deadline(at, now, period);

            // Early in process life the clock may not reach back a full interval
            let Some(cutoff) = now.checked_sub(interval) else {
                continue;
            };

            let removed = {
                let mut guard = store.lock().await;
                guard.remove_expired(cutoff)
            };

            if removed > 0 {
                info!("Cache reaper: removed {} expired entries", removed);
            } else {
                debug!("Cache reaper: no expired entries found");
            }
        }
    })
}

/// Next sweep time after a sweep scheduled for `prev` ran at `now`.
///
/// Keeps a fixed rate while on schedule; after a missed tick the next sweep
/// is one period from `now` rather than a burst of catch-up sweeps.
/// `None` when the deadline is not representable.
fn next_deadline(prev: Instant, now: Instant, period: Duration) -> Option<Instant> {
    let next = prev.checked_add(period)?;
    if next > now {
        Some(next)
    } else {
        now.checked_add(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_expired_entries() {
        let store = shared_store();
        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(1), shutdown.clone());

        store
            .lock()
            .await
            .insert("expire_soon".to_string(), Bytes::from_static(b"value"));

        time::sleep(Duration::from_millis(2500)).await;

        assert!(
            store.lock().await.get("expire_soon").is_none(),
            "Expired entry should have been reaped"
        );

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let store = shared_store();
        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(10), shutdown.clone());

        store
            .lock()
            .await
            .insert("long_lived".to_string(), Bytes::from_static(b"value"));

        time::sleep(Duration::from_secs(5)).await;

        assert_eq!(
            store.lock().await.get("long_lived"),
            Some(Bytes::from_static(b"value")),
            "Fresh entry should not be removed"
        );

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_sweeps_only_old_entries() {
        let store = shared_store();
        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(2), shutdown.clone());

        store.lock().await.insert("first".to_string(), Bytes::from_static(b"1"));
        time::sleep(Duration::from_millis(1500)).await;
        store.lock().await.insert("second".to_string(), Bytes::from_static(b"2"));

        // Tick at 2s: "first" is exactly 2s old, "second" only 0.5s
        time::sleep(Duration::from_millis(1000)).await;

        {
            let guard = store.lock().await;
            assert!(guard.get("first").is_none());
            assert!(guard.get("second").is_some());
        }

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_stops_on_cancel() {
        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(shared_store(), Duration::from_secs(1), shutdown.clone());

        shutdown.cancel();

        let joined = time::timeout(Duration::from_millis(100), handle).await;
        assert!(joined.is_ok(), "Reaper should finish after cancellation");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_accepts_zero_interval() {
        let store = shared_store();
        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(store.clone(), Duration::ZERO, shutdown.clone());

        store.lock().await.insert("k".to_string(), Bytes::from_static(b"v"));
        time::sleep(Duration::from_millis(5)).await;

        assert!(store.lock().await.is_empty());

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_survives_huge_interval() {
        let store = shared_store();
        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(
            store.clone(),
            Duration::from_secs(u64::MAX / 2),
            shutdown.clone(),
        );

        store.lock().await.insert("k".to_string(), Bytes::from_static(b"v"));
        time::sleep(Duration::from_secs(60)).await;
        assert!(store.lock().await.get("k").is_some());

        shutdown.cancel();
        assert!(handle.await.is_ok(), "Reaper must not panic on a huge interval");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_schedule_starts_at_spawn() {
        let store = shared_store();
        store.lock().await.insert("k".to_string(), Bytes::from_static(b"v"));

        let shutdown = CancellationToken::new();
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(1), shutdown.clone());

        // Clock moves before the task is first polled; the 1s sweep is already due
        time::advance(Duration::from_millis(1500)).await;
        time::sleep(Duration::from_millis(10)).await;

        assert!(store.lock().await.is_empty());

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[test]
    fn test_next_deadline_on_schedule() {
        let prev = Instant::now();
        let period = Duration::from_secs(1);

        let next = next_deadline(prev, prev + Duration::from_millis(10), period);

        assert_eq!(next, Some(prev + period));
    }

    #[test]
    fn test_next_deadline_after_missed_tick() {
        let prev = Instant::now();
        let period = Duration::from_secs(1);
        let late = prev + Duration::from_millis(2500);

        assert_eq!(next_deadline(prev, late, period), Some(late + period));
    }

    #[test]
    fn test_next_deadline_overflow() {
        let prev = Instant::now();
        assert_eq!(next_deadline(prev, prev, Duration::from_secs(u64::MAX)), None);
    }
}
