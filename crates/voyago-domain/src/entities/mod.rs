//! Domain entities.

pub mod customer;
pub mod preferences;

pub use customer::Customer;
pub use preferences::CustomerPreferences;
