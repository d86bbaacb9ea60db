//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Voyago customer service.
///
/// `NotFound` is the only domain-level condition; everything else is an
/// infrastructure failure that propagates to the caller unchanged. An
/// unreachable collaborator is never reinterpreted as `NotFound`.
#[derive(Error, Debug)]
pub enum VoyagoError {
    // ============ Domain Errors ============
    /// No entity of the given kind exists for the given id.
    #[error("No result for the given {kind} id={id}")]
    NotFound { kind: &'static str, id: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Durable store error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// External service error (origin web service unreachable or broken)
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VoyagoError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for an entity kind and id.
    #[must_use]
    pub fn not_found<T: ToString>(kind: &'static str, id: T) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an external service error.
    #[must_use]
    pub fn external_service<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Cache(_) | Self::ExternalService { .. }
        )
    }
}

impl From<serde_json::Error> for VoyagoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error payload for callers that need to compose messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `VoyagoError`.
    #[must_use]
    pub fn from_error(error: &VoyagoError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&VoyagoError> for ErrorResponse {
    fn from(error: &VoyagoError) -> Self {
        Self::from_error(error)
    }
}
