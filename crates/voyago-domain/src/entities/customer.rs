//! Customer entity.

use crate::value_objects::{LoyaltyProgram, RailPass};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use voyago_core::Entity;

/// Denormalized customer profile, keyed by customer id.
///
/// A `Customer` is only ever built by the origin-profile mapper or
/// deserialized from the cache; it is never assembled from partial data.
/// Cache entries are ephemeral (TTL expiry, silent loss) and must always
/// be reconstructable from the origin system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier (primary key).
    pub customer_id: String,

    /// Customer's last name.
    pub last_name: Option<String>,

    /// Customer's first name.
    pub first_name: Option<String>,

    /// Customer's birth date.
    pub birth_date: Option<NaiveDate>,

    /// Customer's cell phone number.
    pub phone_number: Option<String>,

    /// Customer's email address.
    pub email: Option<String>,

    /// Active loyalty program, if the customer is enrolled in one.
    pub loyalty_program: Option<LoyaltyProgram>,

    /// Active rail passes held by the customer.
    #[serde(default)]
    pub rail_passes: Vec<RailPass>,
}

impl Customer {
    /// Returns the customer's full name, when any name part is known.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// Checks if the customer is enrolled in a loyalty program.
    #[must_use]
    pub const fn has_loyalty_program(&self) -> bool {
        self.loyalty_program.is_some()
    }
}

impl Entity<String> for Customer {
    fn id(&self) -> &String {
        &self.customer_id
    }
}
