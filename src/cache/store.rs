//! Cache Store Module
//!
//! Unsynchronized key-value map with a fixed TTL. Callers pass the current
//! instant in, which keeps expiry decisions deterministic under test.
//! [`TtlCache`](crate::cache::TtlCache) wraps it in a lock for shared use.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to entry mapping with a TTL fixed for its lifetime.
#[derive(Debug)]
pub struct Store {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL applied to every write
    ttl: Duration,
}

impl Store {
    // == Constructor ==
    /// Creates an empty store. `ttl` must keep `Instant + ttl` in range;
    /// [`TtlCache::new`](crate::cache::TtlCache::new) enforces that.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the TTL applied to every write.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and its expiry.
    pub fn insert_at(&mut self, key: String, value: String, now: Instant) {
        self.entries
            .insert(key, CacheEntry::new(value, now, self.ttl));
    }

    // == Get ==
    /// Returns a copy of the value if the entry exists and is live at `now`.
    ///
    /// Expired entries are reported as absent but left in place for the sweep.
    pub fn get_at(&self, key: &str, now: Instant) -> Option<String> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
    }

    // == Sweep ==
    /// Removes every entry expired at `now` and returns how many were dropped.
    pub fn sweep_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
