//! Configuration module
//!
//! Provides the exporter configuration entity and its management: the
//! programmatic builder, YAML file loading, and environment variable
//! overrides.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ExporterConfig, ExporterConfigBuilder, Protocol};
