//! Cache Entry Module
//!
//! Defines the unit of storage and the TTL arithmetic shared by the engine
//! and the outer surfaces.

use std::time::{Duration, Instant};

use crate::error::{CacheError, Result};

// == Cache Entry ==
/// A single stored value with its expiry deadline and generation tag.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// Key the entry is indexed under
    pub key: String,
    /// The stored value, owned by the cache
    pub value: V,
    /// Absolute expiry deadline, None = never expires
    pub expires_at: Option<Instant>,
    /// Cache generation at insertion time
    pub generation: u64,
}

impl<V> Entry<V> {
    // == Constructor ==
    pub fn new(key: String, value: V, expires_at: Option<Instant>, generation: u64) -> Self {
        Self {
            key,
            value,
            expires_at,
            generation,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once `now` reaches its deadline, so a TTL that has
    /// fully elapsed never yields a hit.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}

// == Deadline Resolution ==
/// Resolves a TTL into an absolute deadline.
///
/// A zero TTL means "never expires". Fails with `InvalidTtl` when the
/// deadline lies beyond what `Instant` can represent.
pub fn deadline(now: Instant, ttl: Duration) -> Result<Option<Instant>> {
    if ttl.is_zero() {
        return Ok(None);
    }
    now.checked_add(ttl)
        .map(Some)
        .ok_or_else(|| CacheError::InvalidTtl(format!("{:?} is out of range", ttl)))
}

/// Converts a signed millisecond count into a TTL, rejecting negatives.
pub fn ttl_from_millis(millis: i64) -> Result<Duration> {
    u64::try_from(millis)
        .map(Duration::from_millis)
        .map_err(|_| CacheError::InvalidTtl(format!("{}ms is negative", millis)))
}

/// Converts a signed second count into a TTL, rejecting negatives.
pub fn ttl_from_secs(secs: i64) -> Result<Duration> {
    u64::try_from(secs)
        .map(Duration::from_secs)
        .map_err(|_| CacheError::InvalidTtl(format!("{}s is negative", secs)))
}
