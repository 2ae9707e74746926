//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{build_cache, LruCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    DeleteResponse, GetResponse, HealthResponse, KeysResponse, PurgeResponse, SetRequest,
    SetResponse,
};

/// Application state shared across all handlers.
///
/// The cache locks internally, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache instance
    pub cache: Arc<LruCache<String>>,
}

impl AppState {
    /// Creates a new AppState serving the given cache.
    pub fn new(cache: LruCache<String>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = build_cache(&config.cache_options())?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /entries
///
/// Stores a key-value pair with the requested or default TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    match req.ttl()? {
        Some(ttl) => state.cache.set_with_expiry(req.key.clone(), req.value, ttl)?,
        None => state.cache.set(req.key.clone(), req.value)?,
    }

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /entries/:key
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.cache.get(&key)?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /entries/:key
///
/// Removes a key. Succeeds whether or not the key was present.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    state.cache.remove(&key);

    Json(DeleteResponse::new(key))
}

/// Handler for GET /keys
///
/// Lists the live keys.
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse::new(state.cache.keys()))
}

/// Handler for POST /purge
///
/// Invalidates every entry.
pub async fn purge_handler(State(state): State<AppState>) -> Json<PurgeResponse> {
    state.cache.purge();

    Json(PurgeResponse::new(state.cache.name()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.name()))
}
