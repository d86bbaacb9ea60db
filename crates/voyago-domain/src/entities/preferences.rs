//! Customer preferences record.

use crate::value_objects::SeatPreference;
use serde::{Deserialize, Serialize};

/// Durable seat/class/profile preferences for a customer.
///
/// One record per (customer, profile) pairing; a customer may own many.
/// The record id is assigned by the store on first save, which is why it
/// is optional here. Seat and class preferences stay `None` when unset —
/// absence is preserved, not defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPreferences {
    /// Store-assigned record identifier.
    pub id: Option<String>,

    /// Owning customer id (not unique across records).
    pub customer_id: String,

    /// Preferred seat position, if any.
    pub seat_preference: Option<SeatPreference>,

    /// Preferred travel class (1 or 2), if any.
    pub class_preference: Option<i32>,

    /// Name of this preference profile.
    pub profile_name: String,

    /// Locale code for this profile (e.g. "fr", "en").
    pub language: Option<String>,
}

impl CustomerPreferences {
    /// Creates a new, not-yet-persisted preferences record.
    #[must_use]
    pub fn new(
        customer_id: impl Into<String>,
        seat_preference: Option<SeatPreference>,
        class_preference: Option<i32>,
        profile_name: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            id: None,
            customer_id: customer_id.into(),
            seat_preference,
            class_preference,
            profile_name: profile_name.into(),
            language,
        }
    }

    /// Checks whether the record has been persisted.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
