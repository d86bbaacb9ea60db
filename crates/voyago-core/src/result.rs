//! Result type aliases for the Voyago customer service.

use crate::VoyagoError;

/// A specialized `Result` type for Voyago operations.
pub type VoyagoResult<T> = Result<T, VoyagoError>;
