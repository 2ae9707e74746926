//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /entries` - Store a key-value pair
//! - `GET /entries/:key` - Retrieve a value by key
//! - `DELETE /entries/:key` - Remove a key
//! - `GET /keys` - List live keys
//! - `POST /purge` - Invalidate every entry
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
