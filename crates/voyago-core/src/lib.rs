//! # Voyago Core
//!
//! Core types, traits, and error definitions for the Voyago customer
//! service. This crate provides the foundational abstractions used across
//! all layers: the unified error taxonomy, result alias, and the seams the
//! domain, repository, and service crates plug into.

pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use error::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
