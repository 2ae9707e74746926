//! Cache Module
//!
//! Provides an in-process cache with TTL expiration and LRU eviction.

mod contract;
mod entry;
mod list;
mod lru;
mod provider;


// Re-export public types
pub use contract::Cache;
pub use entry::{deadline, ttl_from_millis, ttl_from_secs, Entry};
pub use list::{EvictionList, Slot};
pub use lru::{LruCache, Sweep};
pub use provider::{build_cache, CacheOptions};
