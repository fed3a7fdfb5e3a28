//! Kvicksand - An ephemeral key-value cache server
//!
//! Values live for a fixed TTL and are reclaimed by a background sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStore, TtlCache};
pub use config::Config;
