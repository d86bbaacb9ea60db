//! Preference-related DTOs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use voyago_core::rules;
use voyago_domain::SeatPreference;

/// Locale codes the preference profile accepts.
const SUPPORTED_LANGUAGES: [&str; 6] = ["fr", "de", "es", "en", "it", "pt"];

/// Request to create a preference profile for a customer.
///
/// Seat and class preferences are genuinely optional; leaving them out
/// records "unset", not a default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePreferencesRequest {
    /// Preferred seat position.
    pub seat_preference: Option<SeatPreference>,

    /// Preferred travel class; only first (1) and second (2) exist.
    #[validate(range(min = 1, max = 2, message = "Class preference must be 1 or 2"))]
    pub class_preference: Option<i32>,

    /// Name of the preference profile.
    #[validate(
        length(min = 1, max = 50, message = "Profile name must be 1-50 characters"),
        custom(function = validate_profile_name)
    )]
    pub profile_name: String,

    /// Locale code for the profile.
    #[validate(custom(function = validate_language))]
    pub language: String,
}

/// Profile names must be non-blank and carry letters, whitespace, and
/// hyphens only.
fn validate_profile_name(value: &str) -> Result<(), ValidationError> {
    rules::not_blank(value)
        .map_err(|e| e.with_message("Profile name must not be blank".into()))?;
    if value
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-')
    {
        Ok(())
    } else {
        Err(ValidationError::new("profile_name_charset")
            .with_message("Profile name may only contain letters, spaces, and hyphens".into()))
    }
}

fn validate_language(value: &str) -> Result<(), ValidationError> {
    if SUPPORTED_LANGUAGES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_language")
            .with_message("Language must be one of fr, de, es, en, it, pt".into()))
    }
}
