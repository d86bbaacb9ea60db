//! Customer service trait definition.

use crate::dto::CreatePreferencesRequest;
use async_trait::async_trait;
use voyago_core::{Interface, VoyagoResult};
use voyago_domain::{Customer, CustomerPreferences};

/// Orchestrates cache-aside customer retrieval and preference CRUD.
#[async_trait]
pub trait CustomerService: Interface + Send + Sync {
    /// Retrieves a customer profile by id.
    ///
    /// Serves from the cache when possible; falls through to the origin
    /// system of record on a miss and populates the cache with the
    /// result. Fails with `NotFound` (kind `"customer"`) when neither
    /// the cache nor the origin knows the id.
    async fn get_customer_info(&self, customer_id: &str) -> VoyagoResult<Customer>;

    /// Creates a new preference profile for a customer.
    ///
    /// Always creates; never merges with existing records, and does not
    /// check that the customer exists. Returns the persisted record with
    /// its store-assigned id.
    async fn create_customer_preferences(
        &self,
        customer_id: &str,
        request: CreatePreferencesRequest,
    ) -> VoyagoResult<CustomerPreferences>;

    /// Retrieves every preference record belonging to a customer.
    ///
    /// A customer with zero records fails with `NotFound` (kind
    /// `"customer"`), the same signal as an unknown customer.
    async fn get_customer_preferences(
        &self,
        customer_id: &str,
    ) -> VoyagoResult<Vec<CustomerPreferences>>;
}
