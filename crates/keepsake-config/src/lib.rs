//! Configuration models and loading for Keepsake.
//!
//! This crate owns the Keepsake config schema, validation, and the JSON5
//! file loading used by embedding applications.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Default on-disk config location helper.
pub use loader::default_config_path;
/// Configuration schema models.
pub use model::*;
