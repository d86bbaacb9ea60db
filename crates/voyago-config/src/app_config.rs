//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use voyago_core::TelemetryConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Redis customer cache configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Upstream customer web service configuration.
    #[serde(default)]
    pub customer_ws: CustomerWsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "voyago-customer".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Redis customer cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Whether the cache is enabled at all.
    pub enabled: bool,
    /// Redis connection URL.
    pub url: String,
    /// Connection pool size.
    pub pool_size: usize,
    /// Time-to-live for cached customers, in seconds. Applied uniformly
    /// to every entry; there is no per-entry override.
    pub customer_ttl_secs: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "redis://127.0.0.1:6379".to_string(),
            pool_size: 16,
            customer_ttl_secs: 10_800,
        }
    }
}

impl RedisConfig {
    /// Returns the customer TTL as a `Duration`.
    #[must_use]
    pub const fn customer_ttl(&self) -> Duration {
        Duration::from_secs(self.customer_ttl_secs)
    }
}

/// Upstream customer web service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerWsConfig {
    /// Base URL of the customer web service.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CustomerWsConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/customers".to_string(),
            timeout_secs: 10,
        }
    }
}

impl CustomerWsConfig {
    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
