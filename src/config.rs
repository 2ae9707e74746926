//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{ttl_from_secs, CacheOptions};
use crate::error::{CacheError, Result};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Diagnostic name of the served cache
    pub cache_name: String,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// TTL applied to entries stored without one, zero = no expiry
    pub default_ttl: Duration,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval, zero disables the sweeper
    pub cleanup_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_NAME` - Cache name used in logs (default: "default")
    /// - `MAX_ENTRIES` - Maximum cache entries, positive (default: 1000)
    /// - `DEFAULT_TTL` - Default TTL in seconds, 0 = none (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, 0 = off (default: 1)
    ///
    /// Unset variables fall back to their defaults; set but malformed ones
    /// are rejected.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_entries: i64 = parse_var("MAX_ENTRIES")?.unwrap_or(defaults.max_entries as i64);
        let max_entries = usize::try_from(max_entries)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(CacheError::InvalidCapacity(max_entries))?;

        let default_ttl = match parse_var::<i64>("DEFAULT_TTL")? {
            Some(secs) => ttl_from_secs(secs)?,
            None => defaults.default_ttl,
        };

        let cleanup_interval = match parse_var::<u64>("CLEANUP_INTERVAL")? {
            Some(secs) => Duration::from_secs(secs),
            None => defaults.cleanup_interval,
        };

        Ok(Self {
            cache_name: env::var("CACHE_NAME").unwrap_or(defaults.cache_name),
            max_entries,
            default_ttl,
            server_port: parse_var("SERVER_PORT")?.unwrap_or(defaults.server_port),
            cleanup_interval,
        })
    }

    /// Options for building the served cache.
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::new(self.cache_name.clone(), self.max_entries, self.default_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        let options = CacheOptions::default();
        Self {
            cache_name: options.name,
            max_entries: options.capacity,
            default_ttl: options.default_ttl,
            server_port: 3000,
            cleanup_interval: Duration::from_secs(1),
        }
    }
}

/// Reads and parses `name`, returning None when it is unset.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CacheError::InvalidConfig(format!("{}={:?} is malformed", name, raw))),
        Err(_) => Ok(None),
    }
}
