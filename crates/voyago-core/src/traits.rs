//! Core traits shared across layers.

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}
