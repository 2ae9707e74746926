//! Concurrency Tests
//!
//! Many threads sharing one cache instance without external locking.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lru_ttl_cache::{build_cache, Cache, CacheError, CacheOptions, LruCache};

const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 2_000;

fn shared_cache(capacity: usize) -> Arc<LruCache<u64>> {
    let options = CacheOptions::new("concurrency", capacity, Duration::from_secs(60));
    Arc::new(build_cache(&options).unwrap())
}

#[test]
fn test_capacity_holds_under_contention() {
    let capacity = 64;
    let cache = shared_cache(capacity);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = format!("k{}", (t * 31 + i) % 200);
                    match i % 5 {
                        0 | 1 => cache.set(key, i as u64).unwrap(),
                        2 => {
                            let _ = cache.get(&key);
                        }
                        3 => cache.remove(&key),
                        _ => assert!(cache.len() <= capacity),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= capacity);
    assert_eq!(cache.len(), cache.keys().len());
}

#[test]
fn test_disjoint_writers_read_their_own_values() {
    let cache = shared_cache(THREADS * 10);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..10u64 {
                    let key = format!("t{}-{}", t, i);
                    cache.set(key.clone(), i).unwrap();
                    assert_eq!(cache.get(&key).unwrap(), i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Capacity fits every key, so nothing was evicted
    assert_eq!(cache.len(), THREADS * 10);
}

#[test]
fn test_purge_races_with_writers() {
    let cache: Arc<dyn Cache<u64>> = shared_cache(32);

    let writers: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..500u64 {
                    cache.set(format!("{}-{}", t, i % 40), i).unwrap();
                    if i % 50 == 0 {
                        cache.purge();
                    }
                }
            })
        })
        .collect();

    for handle in writers {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 32);
    cache.purge();
    assert_eq!(cache.len(), 0);
    assert!(cache.keys().is_empty());
    assert!(matches!(cache.get("0-0"), Err(CacheError::KeyNotFound(_))));
}
