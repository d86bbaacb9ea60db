//! Redis-backed customer cache.

use super::cache_keys;
use super::CustomerCacheRepository;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use voyago_core::{Entity, VoyagoError, VoyagoResult};
use voyago_domain::Customer;

/// Default TTL for cached customers (3 hours).
pub const DEFAULT_CUSTOMER_TTL: Duration = Duration::from_secs(10_800);

/// Redis-backed customer cache.
///
/// Profiles are stored as JSON values under [`cache_keys::customer_by_id`]
/// keys, each written with the configured TTL (`SET .. EX`). Expiry is
/// Redis's concern; a missing key is reported as `None`, never an error.
#[derive(Component)]
#[shaku(interface = CustomerCacheRepository)]
pub struct RedisCustomerCache {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
    /// Time-to-live applied to every entry.
    #[shaku(default = DEFAULT_CUSTOMER_TTL)]
    ttl: Duration,
}

impl RedisCustomerCache {
    /// Creates a cache with the default TTL.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            ttl: DEFAULT_CUSTOMER_TTL,
        }
    }

    /// Creates a cache with the given TTL.
    #[must_use]
    pub fn with_ttl(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self {
            pool: Some(pool),
            ttl,
        }
    }

    /// Creates a no-op cache (for when Redis is disabled).
    ///
    /// Every lookup misses and every save reports `false`, so callers
    /// always fall through to the origin.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            ttl: DEFAULT_CUSTOMER_TTL,
        }
    }

    /// Checks whether a Redis pool is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    /// Returns the configured TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn get_conn(&self) -> VoyagoResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| VoyagoError::cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(VoyagoError::cache("Cache is disabled")),
        }
    }
}

#[async_trait]
impl CustomerCacheRepository for RedisCustomerCache {
    async fn save(&self, customer: &Customer) -> VoyagoResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let key = cache_keys::customer_by_id(customer.id());
        let json = serde_json::to_string(customer)?;
        let ttl_secs = self.ttl.as_secs().max(1);

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(&key, json, ttl_secs)
            .await
            .map_err(|e| VoyagoError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached customer '{}' with TTL {}s", customer.customer_id, ttl_secs);
        Ok(true)
    }

    async fn find_by_id(&self, id: &str) -> VoyagoResult<Option<Customer>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let key = cache_keys::customer_by_id(id);
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| VoyagoError::cache(format!("Failed to get key '{}': {}", key, e)))?;

        match value {
            Some(json) => {
                debug!("Cache hit for customer '{}'", id);
                let customer: Customer = serde_json::from_str(&json).map_err(|e| {
                    VoyagoError::cache(format!("Corrupt cache entry for '{}': {}", key, e))
                })?;
                Ok(Some(customer))
            }
            None => {
                debug!("Cache miss for customer '{}'", id);
                Ok(None)
            }
        }
    }
}
