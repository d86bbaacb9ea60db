//! In-process preference store backend.

pub mod preference_repository;

pub use preference_repository::InMemoryPreferenceRepository;
