//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries until it is
//! told to stop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::Store;

/// Spawns the sweep loop on `runtime`.
///
/// Every `interval` the task takes the write lock and drops expired entries.
/// Setting the `shutdown` channel to `true` (or dropping its sender) makes the
/// loop exit at its next check instead of sweeping again; the returned handle
/// resolves once it has.
///
/// The first sweep runs one full `interval` after spawning.
pub fn spawn_sweep_task(
    runtime: &Handle,
    store: Arc<RwLock<Store>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            "Starting TTL sweep task"
        );

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if *shutdown.borrow() {
                        break;
                    }

                    let removed = {
                        let mut store = store.write().await;
                        store.sweep_at(Instant::now())
                    };

                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
            }
        }

        info!("TTL sweep task stopped");
    })
}
