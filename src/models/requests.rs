//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::time::Duration;

use serde::Deserialize;

use crate::cache::ttl_from_millis;
use crate::error::Result;

/// Request body for the SET operation (PUT /entries)
///
/// # Fields
/// - `key`: The cache key to store the value under, may be empty
/// - `value`: The value to store
/// - `ttl_ms`: Optional TTL in milliseconds, 0 = never expires (uses the
///   cache default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<i64>,
}

impl SetRequest {
    /// Resolves the requested TTL.
    ///
    /// Returns None when the cache default applies and `InvalidTtl` for a
    /// negative value.
    pub fn ttl(&self) -> Result<Option<Duration>> {
        self.ttl_ms.map(ttl_from_millis).transpose()
    }
}
