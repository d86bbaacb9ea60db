//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
///
/// The backing Redis is shared with other cached entity kinds, so keys
/// carry both the application namespace and the entity type.
const CACHE_PREFIX: &str = "voyago:cache";

/// Generate a cache key for a customer by id.
#[must_use]
pub fn customer_by_id(id: &str) -> String {
    format!("{}:customer:{}", CACHE_PREFIX, id)
}
