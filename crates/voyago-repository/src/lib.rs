//! # Voyago Repository
//!
//! Data access for the durable preference store:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn PreferenceRepository>   (domain interface)
//! InMemoryPreferenceRepository         (in-process backend)
//! ```
//!
//! The store behind the trait is a document store in deployment terms;
//! only the capability interface is part of the core, so the in-tree
//! backend keeps records in process memory.

pub mod memory;
pub mod traits;

pub use memory::InMemoryPreferenceRepository;
pub use traits::*;
