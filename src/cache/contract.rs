//! Cache Contract Module
//!
//! The operation set every cache implementation provides and every caller
//! depends on.

use std::time::Duration;

use crate::error::Result;

// == Cache Trait ==
/// A bounded key/value cache holding values of type `V`.
///
/// All methods take `&self`; implementations synchronise internally so one
/// instance can be shared across threads for its whole lifetime.
pub trait Cache<V>: Send + Sync {
    /// Stores `value` under `key` using the cache's default TTL.
    fn set(&self, key: String, value: V) -> Result<()>;

    /// Stores `value` under `key`, expiring after `ttl`. A zero TTL never
    /// expires.
    fn set_with_expiry(&self, key: String, value: V, ttl: Duration) -> Result<()>;

    /// Returns a copy of the value stored under `key`.
    ///
    /// Absent, expired and purged keys all fail with `KeyNotFound`.
    fn get(&self, key: &str) -> Result<V>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str);

    /// Returns every live key. Order is unspecified.
    fn keys(&self) -> Vec<String>;

    /// Returns the number of live entries.
    fn len(&self) -> usize;

    /// Invalidates every entry.
    fn purge(&self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
