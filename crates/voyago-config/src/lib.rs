//! # Voyago Config
//!
//! Layered configuration for the Voyago customer service: defaults,
//! per-environment TOML files, and `VOYAGO_`-prefixed environment
//! variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::ConfigLoader;
