//! Sweeper Task
//!
//! Background task that periodically releases expired and purged entries.
//! Reads never depend on it; it only bounds memory held by entries that
//! nothing touches anymore.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::LruCache;

/// Spawns a background task that sweeps `cache` every `interval`.
/// `interval` must be non-zero.
///
/// The returned handle can be used to abort the task during shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(LruCache::<String>::new(1000, Duration::from_secs(300))?);
/// let sweeper = spawn_sweeper(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<V>(cache: Arc<LruCache<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting sweeper for cache '{}' with interval of {:?}",
            cache.name(),
            interval
        );

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let sweep = cache.sweep();
            if sweep.total() > 0 {
                info!(
                    "Sweep of '{}': removed {} expired and {} purged entries",
                    cache.name(),
                    sweep.expired,
                    sweep.reclaimed
                );
            } else {
                debug!("Sweep of '{}': nothing to remove", cache.name());
            }
        }
    })
}
