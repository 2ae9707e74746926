//! LRU TTL Cache - A bounded in-process cache
//!
//! Provides a thread-safe, fixed-capacity key/value cache with LRU eviction
//! and optional per-entry TTL, plus a small HTTP server exposing it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{build_cache, Cache, CacheOptions, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweeper;
