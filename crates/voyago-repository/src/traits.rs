//! Repository trait definitions.

use async_trait::async_trait;
use voyago_core::{Interface, VoyagoResult};
use voyago_domain::CustomerPreferences;

/// Durable store of customer preference records.
///
/// Records are keyed by a store-assigned id and queryable by customer id.
/// Creation is always explicit; there is no merge with existing records
/// and no uniqueness constraint on profile names.
#[async_trait]
pub trait PreferenceRepository: Interface + Send + Sync {
    /// Persists a preference record, assigning an id when none is set.
    ///
    /// Returns the persisted record, including the assigned id.
    async fn save(&self, preferences: &CustomerPreferences) -> VoyagoResult<CustomerPreferences>;

    /// Finds every preference record belonging to a customer.
    ///
    /// The result order is store-defined. An unknown customer id yields an
    /// empty list, not an error.
    async fn find_by_customer_id(&self, customer_id: &str)
        -> VoyagoResult<Vec<CustomerPreferences>>;
}
