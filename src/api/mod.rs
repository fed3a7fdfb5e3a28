//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `GET /` - Greeting, doubles as a liveness probe
//! - `POST /:key` - Store the request body under `key`
//! - `GET /:key` - Retrieve the value stored under `key`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
