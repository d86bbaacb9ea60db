//! Validation utilities.

use crate::{FieldError, VoyagoError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `VoyagoError` on failure.
    fn validate_request(&self) -> Result<(), VoyagoError> {
        self.validate().map_err(validation_errors_to_voyago_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `VoyagoError::Validation`.
#[must_use]
pub fn validation_errors_to_voyago_error(errors: ValidationErrors) -> VoyagoError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    VoyagoError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}
