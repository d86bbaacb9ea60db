//! # Voyago Domain
//!
//! Domain entities and value objects for the Voyago customer service:
//! the cache-ephemeral [`Customer`] identity entity with its embedded
//! loyalty program and rail passes, and the durable
//! [`CustomerPreferences`] record.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
