//! Cache Module
//!
//! In-memory key-value storage with time-based expiry and a background sweep.

mod contract;
mod entry;
mod store;
mod ttl_cache;


// Re-export public types
pub use contract::CacheStore;
pub use entry::CacheEntry;
pub use store::Store;
pub use ttl_cache::{TtlCache, MAX_TTL};
