//! In-memory `PreferenceRepository` implementation.

use crate::traits::PreferenceRepository;
use async_trait::async_trait;
use shaku::Component;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;
use voyago_core::VoyagoResult;
use voyago_domain::CustomerPreferences;

/// Preference store backed by process memory.
///
/// Records are kept in insertion order, which is the order
/// `find_by_customer_id` returns them in.
#[derive(Component, Default)]
#[shaku(interface = PreferenceRepository)]
pub struct InMemoryPreferenceRepository {
    #[shaku(default)]
    records: RwLock<Vec<CustomerPreferences>>,
}

impl InMemoryPreferenceRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates a repository pre-loaded with the given records.
    #[must_use]
    pub fn with_records(records: Vec<CustomerPreferences>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Counts all stored records.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn save(&self, preferences: &CustomerPreferences) -> VoyagoResult<CustomerPreferences> {
        let mut saved = preferences.clone();
        if saved.id.is_none() {
            saved.id = Some(Uuid::new_v4().to_string());
        }

        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == saved.id) {
            Some(existing) => *existing = saved.clone(),
            None => records.push(saved.clone()),
        }

        debug!(
            "Saved preferences id={:?} for customer {}",
            saved.id, saved.customer_id
        );
        Ok(saved)
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> VoyagoResult<Vec<CustomerPreferences>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect())
    }
}
