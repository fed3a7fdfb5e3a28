//! Concurrency and lifecycle tests for the TTL cache
//!
//! Exercises the cache through its public contract from many tasks at once on
//! a multi-threaded runtime.

use std::sync::Arc;
use std::time::Duration;

use kvicksand::{CacheStore, TtlCache};

const WRITERS: usize = 16;
const KEYS_PER_WRITER: usize = 50;
const READERS: usize = 8;

fn key(writer: usize, n: usize) -> String {
    format!("w{}k{}", writer, n)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_no_lost_updates() {
    let cache = Arc::new(TtlCache::new(Duration::from_secs(300), Duration::from_millis(5)).unwrap());

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let cache = cache.clone();
            tokio::spawn(async move {
                for n in 0..KEYS_PER_WRITER {
                    cache.set(key(writer, n), format!("value-{}-{}", writer, n)).await;
                    // Own write is visible as soon as set returns
                    assert_eq!(
                        cache.get(&key(writer, n)).await,
                        Some(format!("value-{}-{}", writer, n))
                    );
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..READERS)
        .map(|reader| {
            let cache = cache.clone();
            tokio::spawn(async move {
                for n in 0..KEYS_PER_WRITER {
                    let writer = (reader + n) % WRITERS;
                    // Either not yet written or exactly the writer's value
                    if let Some(value) = cache.get(&key(writer, n)).await {
                        assert_eq!(value, format!("value-{}-{}", writer, n));
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.await.unwrap();
    }

    assert_eq!(cache.len().await, WRITERS * KEYS_PER_WRITER);
    for writer in 0..WRITERS {
        for n in 0..KEYS_PER_WRITER {
            assert_eq!(
                cache.get(&key(writer, n)).await,
                Some(format!("value-{}-{}", writer, n))
            );
        }
    }

    cache.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sweep_under_load_keeps_live_entries() {
    let cache = Arc::new(TtlCache::new(Duration::from_millis(40), Duration::from_millis(5)).unwrap());

    // Keep rewriting one key while short-lived keys expire around it
    let hot = {
        let cache = cache.clone();
        tokio::spawn(async move {
            for n in 0..40 {
                cache.set("hot".to_string(), n.to_string()).await;
                assert_eq!(cache.get("hot").await, Some(n.to_string()));
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
    };

    for n in 0..20 {
        cache.set(format!("cold{}", n), "v".to_string()).await;
    }

    hot.await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(cache.is_empty().await, "Every entry should be swept by now");
    cache.shutdown().await;
}

#[tokio::test]
async fn test_sweep_reclaims_memory_and_key_reuse() {
    let cache = TtlCache::new(Duration::from_millis(30), Duration::from_millis(10)).unwrap();

    cache.set("k1".to_string(), "stale".to_string()).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(cache.len().await, 0);

    cache.set("k1".to_string(), "fresh".to_string()).await;
    assert_eq!(cache.get("k1").await, Some("fresh".to_string()));

    cache.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_stops_background_removal() {
    let cache = TtlCache::new(Duration::from_millis(30), Duration::from_millis(10)).unwrap();

    cache.set("k1".to_string(), "v1".to_string()).await;
    cache.shutdown().await;

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(cache.get("k1").await, None, "Expired entries stay hidden");
    assert_eq!(cache.len().await, 1, "No sweep may run after shutdown");
}

#[tokio::test]
async fn test_example_scenarios() {
    let cache = TtlCache::new(Duration::from_millis(30), Duration::from_millis(10)).unwrap();

    assert_eq!(cache.get("k1").await, None);

    cache.set("k1".to_string(), "v1".to_string()).await;
    assert_eq!(cache.get("k1").await, Some("v1".to_string()));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.get("k1").await, None);

    cache.set("k1".to_string(), "v1".to_string()).await;
    cache.set("k1".to_string(), "v2".to_string()).await;
    assert_eq!(cache.get("k1").await, Some("v2".to_string()));

    cache.shutdown().await;
}
