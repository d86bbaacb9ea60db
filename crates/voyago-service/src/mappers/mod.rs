//! Wire-to-domain mappers.

pub mod profile_mapper;

pub use profile_mapper::to_customer;
