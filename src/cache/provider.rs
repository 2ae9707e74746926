//! Cache Provider Module
//!
//! Builds configured cache instances. There is no process-wide cache;
//! callers own what they build and share it explicitly (e.g. via `Arc`).

use std::time::Duration;

use tracing::info;

use super::lru::LruCache;
use crate::error::Result;

// == Cache Options ==
/// Construction parameters for a cache instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Diagnostic label, need not be unique
    pub name: String,
    /// Maximum number of live entries
    pub capacity: usize,
    /// TTL applied by `set`, zero = no default expiry
    pub default_ttl: Duration,
}

impl CacheOptions {
    pub fn new(name: impl Into<String>, capacity: usize, default_ttl: Duration) -> Self {
        Self {
            name: name.into(),
            capacity,
            default_ttl,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_default_ttl(mut self, default_ttl: Duration) -> Self {
        self.default_ttl = default_ttl;
        self
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            capacity: 1000,
            default_ttl: Duration::from_secs(300),
        }
    }
}

// == Build Cache ==
/// Creates a ready-to-use cache from `options`.
///
/// Fails with `InvalidCapacity` when the capacity is zero.
pub fn build_cache<V: Clone>(options: &CacheOptions) -> Result<LruCache<V>> {
    let cache = LruCache::with_name(options.name.clone(), options.capacity, options.default_ttl)?;
    info!(
        "Cache '{}' created: capacity={}, default_ttl={:?}",
        options.name, options.capacity, options.default_ttl
    );
    Ok(cache)
}
