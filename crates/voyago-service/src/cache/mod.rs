//! Customer cache layer.

pub mod cache_keys;
pub mod customer_cache;
pub mod redis_cache;

pub use customer_cache::CustomerCacheRepository;
pub use redis_cache::{RedisCustomerCache, DEFAULT_CUSTOMER_TTL};
