//! Value objects embedded in domain entities.

pub mod loyalty;
pub mod rail_pass;
pub mod seat;

pub use loyalty::{LoyaltyProgram, LoyaltyStatus};
pub use rail_pass::{PassType, RailPass};
pub use seat::SeatPreference;
