//! Customer service implementations.

pub mod customer_service_impl;

pub use customer_service_impl::CustomerServiceImpl;
