//! Service-layer request DTOs.

pub mod preferences_dto;

pub use preferences_dto::CreatePreferencesRequest;
