//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use std::any::Any;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::error;

use super::handlers::{get_handler, index_handler, set_handler, AppState};
use super::MAX_VALUE_SIZE;
use crate::error::CacheError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Greeting
/// - `POST /:key` - Store a value
/// - `GET /:key` - Retrieve a value
///
/// Other methods on `/:key` get a 405 with an `Allow` header.
///
/// # Middleware
/// - Body limit: values above `MAX_VALUE_SIZE` are rejected with 413
/// - Timeout: requests running past `request_timeout` get a 408
/// - Panic recovery: a panicking handler yields a 500 instead of a dropped connection
/// - Tracing: Logs all requests
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/:key", get(get_handler).post(set_handler))
        .layer(DefaultBodyLimit::max(MAX_VALUE_SIZE))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unknown error".to_string()
    };

    error!("Recovered from handler panic: {}", detail);
    CacheError::Internal(format!("Recovered: {}", detail)).into_response()
}
