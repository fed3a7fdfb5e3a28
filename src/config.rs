//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Durations are kept as integers here; zero values are rejected when the cache
/// is constructed, not while parsing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live in milliseconds applied to every write
    pub ttl_ms: u64,
    /// Background sweep interval in milliseconds
    pub sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound on the time spent serving a single request, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 1800000, 30 minutes)
    /// - `SWEEP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds (default: 15)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_ms: env_or("CACHE_TTL_MS", defaults.ttl_ms),
            sweep_interval_ms: env_or("SWEEP_INTERVAL_MS", defaults.sweep_interval_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
        }
    }

    /// TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Interval between background sweeps.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }

    /// Per-request timeout enforced by the HTTP layer.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: 30 * 60 * 1000,
            sweep_interval_ms: 5_000,
            server_port: 8080,
            request_timeout_secs: 15,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
