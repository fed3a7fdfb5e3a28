//! Cache Contract
//!
//! The two operations the HTTP layer is allowed to depend on.

use async_trait::async_trait;

/// Key-value store with time-based expiry, as seen by its consumers.
///
/// Implementations own their storage; callers get copies of values and never
/// observe lock state or sweep timing.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Inserts or overwrites `key`, restarting its expiry from now.
    async fn set(&self, key: String, value: String);

    /// Returns the value for `key`, or `None` if it was never written or has
    /// expired.
    async fn get(&self, key: &str) -> Option<String>;
}
