//! Customer service implementation.

use crate::cache::CustomerCacheRepository;
use crate::customer_service::CustomerService;
use crate::dto::CreatePreferencesRequest;
use crate::mappers::profile_mapper;
use crate::origin::CustomerOriginClient;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error};
use voyago_core::{ValidateExt, VoyagoError, VoyagoResult};
use voyago_domain::{Customer, CustomerPreferences};
use voyago_repository::PreferenceRepository;

/// Cache-aside customer service.
///
/// Concurrent misses for the same id may each call the origin and each
/// write the cache; the last writer wins. All writes within the TTL
/// window are equivalent snapshots of the same origin truth, so no
/// single-flight de-duplication is applied.
#[derive(Component)]
#[shaku(interface = CustomerService)]
pub struct CustomerServiceImpl {
    #[shaku(inject)]
    origin: Arc<dyn CustomerOriginClient>,
    #[shaku(inject)]
    cache: Arc<dyn CustomerCacheRepository>,
    #[shaku(inject)]
    repository: Arc<dyn PreferenceRepository>,
}

impl CustomerServiceImpl {
    /// Creates a new customer service.
    #[must_use]
    pub fn new(
        origin: Arc<dyn CustomerOriginClient>,
        cache: Arc<dyn CustomerCacheRepository>,
        repository: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self {
            origin,
            cache,
            repository,
        }
    }

    /// Cache-miss path: ask the origin, populate the cache, return the
    /// mapped customer (not a cache re-read).
    async fn call_customer_origin(&self, customer_id: &str) -> VoyagoResult<Customer> {
        let profile = self
            .origin
            .get_customer(customer_id)
            .await?
            .ok_or_else(|| VoyagoError::not_found("customer", customer_id))?;

        let customer = profile_mapper::to_customer(profile);

        let saved_in_cache = self.cache.save(&customer).await?;
        if saved_in_cache {
            debug!("Customer {} saved in cache", customer.customer_id);
        } else {
            error!("COULD NOT SAVE {} in cache", customer.customer_id);
        }

        Ok(customer)
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn get_customer_info(&self, customer_id: &str) -> VoyagoResult<Customer> {
        debug!("Getting customer with customer_id={}", customer_id);

        if let Some(customer) = self.cache.find_by_id(customer_id).await? {
            return Ok(customer);
        }
        self.call_customer_origin(customer_id).await
    }

    async fn create_customer_preferences(
        &self,
        customer_id: &str,
        request: CreatePreferencesRequest,
    ) -> VoyagoResult<CustomerPreferences> {
        debug!(
            "createCustomerPreferences: seat \"{:?}\", class \"{:?}\" and profile \"{}\" with language \"{}\" for customer \"{}\"",
            request.seat_preference,
            request.class_preference,
            request.profile_name,
            request.language,
            customer_id
        );

        request.validate_request()?;

        let preferences = CustomerPreferences::new(
            customer_id,
            request.seat_preference,
            request.class_preference,
            request.profile_name,
            Some(request.language),
        );
        self.repository.save(&preferences).await
    }

    async fn get_customer_preferences(
        &self,
        customer_id: &str,
    ) -> VoyagoResult<Vec<CustomerPreferences>> {
        debug!("getCustomerPreferences for customer \"{}\"", customer_id);

        let preferences = self.repository.find_by_customer_id(customer_id).await?;
        if preferences.is_empty() {
            return Err(VoyagoError::not_found("customer", customer_id));
        }
        Ok(preferences)
    }
}

impl std::fmt::Debug for CustomerServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::model::{CustomerProfile, MiscGroup, MiscRecord, TypedValue};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use voyago_domain::SeatPreference;
    use voyago_repository::InMemoryPreferenceRepository;

    /// In-memory cache fake; `refuse_writes` makes every save report `false`.
    #[derive(Default)]
    struct InMemoryCustomerCache {
        entries: Mutex<HashMap<String, Customer>>,
        refuse_writes: bool,
    }

    impl InMemoryCustomerCache {
        fn new() -> Self {
            Self::default()
        }

        fn refusing_writes() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                refuse_writes: true,
            }
        }

        fn with_customer(customer: Customer) -> Self {
            let cache = Self::new();
            cache
                .entries
                .lock()
                .unwrap()
                .insert(customer.customer_id.clone(), customer);
            cache
        }
    }

    #[async_trait]
    impl CustomerCacheRepository for InMemoryCustomerCache {
        async fn save(&self, customer: &Customer) -> VoyagoResult<bool> {
            if self.refuse_writes {
                return Ok(false);
            }
            self.entries
                .lock()
                .unwrap()
                .insert(customer.customer_id.clone(), customer.clone());
            Ok(true)
        }

        async fn find_by_id(&self, id: &str) -> VoyagoResult<Option<Customer>> {
            Ok(self.entries.lock().unwrap().get(id).cloned())
        }
    }

    /// Origin fake serving a fixed set of profiles and counting calls.
    #[derive(Default)]
    struct StubOriginClient {
        profiles: HashMap<String, CustomerProfile>,
        unavailable: bool,
        calls: AtomicUsize,
    }

    impl StubOriginClient {
        fn with_profile(profile: CustomerProfile) -> Self {
            Self {
                profiles: HashMap::from([(profile.id.clone(), profile)]),
                ..Self::default()
            }
        }

        fn empty() -> Self {
            Self::default()
        }

        fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CustomerOriginClient for StubOriginClient {
        async fn get_customer(&self, customer_id: &str) -> VoyagoResult<Option<CustomerProfile>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.unavailable {
                return Err(VoyagoError::external_service(
                    "GET CustomerWS",
                    "connection refused",
                ));
            }
            Ok(self.profiles.get(customer_id).cloned())
        }
    }

    fn cached_customer(id: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            last_name: Some("Cat".to_string()),
            first_name: Some("Grumpy".to_string()),
            birth_date: None,
            phone_number: None,
            email: Some("grumpy@cat.org".to_string()),
            loyalty_program: None,
            rail_passes: vec![],
        }
    }

    fn origin_profile_with_loyalty(id: &str, number: &str, status: &str) -> CustomerProfile {
        CustomerProfile {
            id: id.to_string(),
            personal_information: None,
            personal_details: None,
            misc: vec![MiscGroup {
                group_type: Some(TypedValue::new("LOYALTY")),
                records: vec![MiscRecord {
                    record_type: Some(TypedValue::new("LOYALTY")),
                    fields: HashMap::from([
                        ("loyalty_number".to_string(), number.to_string()),
                        ("loyalty_status".to_string(), status.to_string()),
                        ("disable_status".to_string(), "000".to_string()),
                    ]),
                }],
            }],
        }
    }

    fn service(
        origin: Arc<StubOriginClient>,
        cache: Arc<InMemoryCustomerCache>,
        repository: Arc<InMemoryPreferenceRepository>,
    ) -> CustomerServiceImpl {
        CustomerServiceImpl::new(origin, cache, repository)
    }

    fn create_request(profile_name: &str) -> CreatePreferencesRequest {
        CreatePreferencesRequest {
            seat_preference: Some(SeatPreference::NearWindow),
            class_preference: Some(2),
            profile_name: profile_name.to_string(),
            language: "fr".to_string(),
        }
    }

    #[tokio::test]
    async fn test_cache_hit_returns_without_calling_origin() {
        let origin = Arc::new(StubOriginClient::empty());
        let cache = Arc::new(InMemoryCustomerCache::with_customer(cached_customer("C1")));
        let svc = service(origin.clone(), cache, Arc::new(InMemoryPreferenceRepository::new()));

        let customer = svc.get_customer_info("C1").await.unwrap();

        assert_eq!(customer.customer_id, "C1");
        assert_eq!(origin.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cache_miss_fetches_origin_and_populates_cache() {
        let origin = Arc::new(StubOriginClient::with_profile(origin_profile_with_loyalty(
            "C1", "LP1", "GOLD",
        )));
        let cache = Arc::new(InMemoryCustomerCache::new());
        let svc = service(origin.clone(), cache.clone(), Arc::new(InMemoryPreferenceRepository::new()));

        let customer = svc.get_customer_info("C1").await.unwrap();

        let program = customer.loyalty_program.expect("loyalty program");
        assert_eq!(program.number, "LP1");
        assert_eq!(program.status.as_str(), "GOLD");
        assert_eq!(origin.call_count(), 1);

        // write-back happened: the cache now serves the same value
        let cached = cache.find_by_id("C1").await.unwrap().expect("cached entry");
        assert_eq!(cached, svc.get_customer_info("C1").await.unwrap());
        // and the second read never reached the origin again
        assert_eq!(origin.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_customer_everywhere_is_not_found() {
        let origin = Arc::new(StubOriginClient::empty());
        let svc = service(
            origin,
            Arc::new(InMemoryCustomerCache::new()),
            Arc::new(InMemoryPreferenceRepository::new()),
        );

        let err = svc.get_customer_info("ghost").await.unwrap_err();
        match err {
            VoyagoError::NotFound { kind, id } => {
                assert_eq!(kind, "customer");
                assert_eq!(id, "ghost");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_origin_unavailable_is_not_reinterpreted_as_not_found() {
        let origin = Arc::new(StubOriginClient::unavailable());
        let svc = service(
            origin,
            Arc::new(InMemoryCustomerCache::new()),
            Arc::new(InMemoryPreferenceRepository::new()),
        );

        let err = svc.get_customer_info("C1").await.unwrap_err();
        assert!(matches!(err, VoyagoError::ExternalService { .. }));
    }

    #[tokio::test]
    async fn test_refused_cache_write_still_returns_the_customer() {
        let origin = Arc::new(StubOriginClient::with_profile(origin_profile_with_loyalty(
            "C1", "LP1", "GOLD",
        )));
        let cache = Arc::new(InMemoryCustomerCache::refusing_writes());
        let svc = service(origin.clone(), cache, Arc::new(InMemoryPreferenceRepository::new()));

        let customer = svc.get_customer_info("C1").await.unwrap();
        assert_eq!(customer.customer_id, "C1");

        // next read misses again and goes back to the origin
        svc.get_customer_info("C1").await.unwrap();
        assert_eq!(origin.call_count(), 2);
    }

    #[tokio::test]
    async fn test_create_then_read_preferences_sees_the_record() {
        let repository = Arc::new(InMemoryPreferenceRepository::new());
        let svc = service(
            Arc::new(StubOriginClient::empty()),
            Arc::new(InMemoryCustomerCache::new()),
            repository,
        );

        let created = svc
            .create_customer_preferences("C1", create_request("voyage"))
            .await
            .unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.language.as_deref(), Some("fr"));

        let found = svc.get_customer_preferences("C1").await.unwrap();
        assert!(found.contains(&created));
    }

    #[tokio::test]
    async fn test_prior_preference_records_persist_alongside_new_ones() {
        let svc = service(
            Arc::new(StubOriginClient::empty()),
            Arc::new(InMemoryCustomerCache::new()),
            Arc::new(InMemoryPreferenceRepository::new()),
        );

        svc.create_customer_preferences("C1", create_request("voyage"))
            .await
            .unwrap();
        svc.create_customer_preferences("C1", create_request("voyage"))
            .await
            .unwrap();

        // duplicate profile names are allowed; both records survive
        assert_eq!(svc.get_customer_preferences("C1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_preferences_can_exist_for_unknown_customers() {
        let svc = service(
            Arc::new(StubOriginClient::empty()),
            Arc::new(InMemoryCustomerCache::new()),
            Arc::new(InMemoryPreferenceRepository::new()),
        );

        // no referential check against cache or origin
        let created = svc
            .create_customer_preferences("nobody", create_request("voyage"))
            .await
            .unwrap();
        assert_eq!(created.customer_id, "nobody");
    }

    #[tokio::test]
    async fn test_invalid_create_request_is_rejected_before_persisting() {
        let repository = Arc::new(InMemoryPreferenceRepository::new());
        let svc = service(
            Arc::new(StubOriginClient::empty()),
            Arc::new(InMemoryCustomerCache::new()),
            repository.clone(),
        );

        let mut request = create_request("voyage");
        request.class_preference = Some(12);
        let err = svc
            .create_customer_preferences("C1", request)
            .await
            .unwrap_err();
        assert!(matches!(err, VoyagoError::Validation(_)));
        assert_eq!(repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_zero_preference_records_is_not_found() {
        let svc = service(
            Arc::new(StubOriginClient::empty()),
            Arc::new(InMemoryCustomerCache::new()),
            Arc::new(InMemoryPreferenceRepository::new()),
        );

        let err = svc.get_customer_preferences("C1").await.unwrap_err();
        match err {
            VoyagoError::NotFound { kind, id } => {
                assert_eq!(kind, "customer");
                assert_eq!(id, "C1");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unset_seat_and_class_are_preserved_as_unset() {
        let svc = service(
            Arc::new(StubOriginClient::empty()),
            Arc::new(InMemoryCustomerCache::new()),
            Arc::new(InMemoryPreferenceRepository::new()),
        );

        let request = CreatePreferencesRequest {
            seat_preference: None,
            class_preference: None,
            profile_name: "minimal".to_string(),
            language: "en".to_string(),
        };
        let created = svc
            .create_customer_preferences("C1", request)
            .await
            .unwrap();
        assert!(created.seat_preference.is_none());
        assert!(created.class_preference.is_none());
    }
}
