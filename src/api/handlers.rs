//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::MAX_KEY_LENGTH;
use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Application state shared across all handlers.
///
/// Handlers only see the cache through the [`CacheStore`] contract.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }
}

/// Handler for GET /
pub async fn index_handler() -> &'static str {
    "Hello!\n"
}

/// Handler for POST /:key
///
/// Stores the raw request body under `key`. An empty body is rejected before
/// the cache is touched.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: String,
) -> Result<StatusCode> {
    validate_key(&key)?;

    if body.is_empty() {
        return Err(CacheError::InvalidRequest(
            "Request body cannot be empty".to_string(),
        ));
    }

    state.cache.set(key, body).await;
    Ok(StatusCode::OK)
}

/// Handler for GET /:key
///
/// Responds with the stored value as `text/plain`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String> {
    validate_key(&key)?;

    let value = state.cache.get(&key).await;
    value.ok_or(CacheError::NotFound(key))
}

/// Keys are ASCII alphanumeric. Other shapes are treated as an unknown route.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CacheError::NotFound(key.to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}
