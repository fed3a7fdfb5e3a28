//! TTL Cache
//!
//! Shared handle combining the locked [`Store`] with the background sweep task
//! that reclaims expired entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::{CacheStore, Store};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

/// Longest accepted TTL (100 years). Keeps `Instant + ttl` from overflowing.
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Concurrency-safe cache with a fixed TTL and a background sweep.
///
/// Reads take the shared lock and never modify the map; writes and the sweep
/// take the exclusive lock. Share it as `Arc<TtlCache>` and call
/// [`shutdown`](Self::shutdown) before the runtime goes away.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<RwLock<Store>>,
    shutdown_tx: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task on the current runtime.
    ///
    /// # Errors
    /// - `InvalidConfig` if `ttl` or `sweep_interval` is zero, or `ttl`
    ///   exceeds [`MAX_TTL`]
    /// - `Internal` if called outside a Tokio runtime
    pub fn new(ttl: Duration, sweep_interval: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "ttl must be greater than zero".to_string(),
            ));
        }
        if ttl > MAX_TTL {
            return Err(CacheError::InvalidConfig(format!(
                "ttl must not exceed {} seconds",
                MAX_TTL.as_secs()
            )));
        }
        if sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "sweep interval must be greater than zero".to_string(),
            ));
        }

        let runtime = Handle::try_current().map_err(|_| {
            CacheError::Internal("TtlCache must be created inside a Tokio runtime".to_string())
        })?;

        let store = Arc::new(RwLock::new(Store::new(ttl)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(&runtime, store.clone(), sweep_interval, shutdown_rx);

        Ok(Self {
            store,
            shutdown_tx,
            sweeper: Mutex::new(Some(sweeper)),
        })
    }

    /// Creates a cache from the server configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.ttl(), config.sweep_interval())
    }

    /// Returns the TTL applied to every write.
    pub async fn ttl(&self) -> Duration {
        self.store.read().await.ttl()
    }

    // == Length ==
    /// Number of physically stored entries, including expired ones the sweep
    /// has not reached yet.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to exit.
    ///
    /// Once this returns no background removal happens anymore. Reads and
    /// writes keep working. Calling it again is a no-op.
    pub async fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);

        let Some(handle) = self.sweeper.lock().await.take() else {
            return;
        };

        if let Err(err) = handle.await {
            warn!("TTL sweep task ended abnormally: {}", err);
        }
        info!("TTL cache shut down");
    }
}

#[async_trait]
impl CacheStore for TtlCache {
    async fn set(&self, key: String, value: String) {
        let mut store = self.store.write().await;
        store.insert_at(key, value, Instant::now());
    }

    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        store.get_at(key, Instant::now())
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        // Stops the task without waiting for it
        self.shutdown_tx.send_replace(true);
    }
}
