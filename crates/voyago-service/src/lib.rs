//! # Voyago Service
//!
//! Business logic for the Voyago customer service: cache-aside customer
//! retrieval against the upstream system of record, and the preference
//! read/write path against the durable store.

pub mod cache;
pub mod customer_service;
pub mod dto;
pub mod mappers;
pub mod origin;

mod r#impl;

pub use cache::*;
pub use customer_service::*;
pub use dto::*;
pub use origin::*;
pub use r#impl::CustomerServiceImpl;
