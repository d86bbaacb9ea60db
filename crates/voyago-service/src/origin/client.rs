//! Origin client contract.

use super::model::CustomerProfile;
use async_trait::async_trait;
use shaku::Interface;
use voyago_core::VoyagoResult;

/// Client for the upstream customer web service, the system of record
/// for identity data.
///
/// `Ok(None)` means the upstream positively answered that no such
/// customer exists. Transport and availability failures are errors
/// (`VoyagoError::ExternalService`) and are never folded into the
/// not-found outcome. This layer applies no retry and no circuit
/// breaker; latency and availability are the implementation's problem.
#[async_trait]
pub trait CustomerOriginClient: Interface + Send + Sync {
    /// Fetches the wire profile for a customer id.
    async fn get_customer(&self, customer_id: &str) -> VoyagoResult<Option<CustomerProfile>>;
}
