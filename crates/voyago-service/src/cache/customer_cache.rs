//! Customer cache interface.

use async_trait::async_trait;
use shaku::Interface;
use voyago_core::VoyagoResult;
use voyago_domain::Customer;

/// Key-value cache of customer profiles, keyed by customer id.
///
/// Every entry is written with the single globally configured time-to-live;
/// there is no per-entry override. Absence is a normal, silent outcome —
/// an expired or evicted entry looks exactly like one that was never
/// written. Only backend failures are errors.
#[async_trait]
pub trait CustomerCacheRepository: Interface + Send + Sync {
    /// Writes a customer profile into the cache.
    ///
    /// Returns `true` iff the entry was written.
    async fn save(&self, customer: &Customer) -> VoyagoResult<bool>;

    /// Retrieves a customer profile by id.
    ///
    /// Returns `None` when no live entry exists for the id.
    async fn find_by_id(&self, id: &str) -> VoyagoResult<Option<Customer>>;
}
