//! Upstream customer web service boundary.

pub mod client;
pub mod model;

pub use client::CustomerOriginClient;
pub use model::{
    CellNumber, CustomerProfile, EmailAddress, MiscGroup, MiscRecord, PersonalDetails,
    PersonalInformation, TypedValue,
};
