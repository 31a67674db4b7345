//! OTLP Exporter Configuration
//!
//! A small library crate holding the configuration consumed by an
//! OpenTelemetry Protocol (OTLP) exporter initializer: service name,
//! collector endpoint, transport protocol, custom headers and export
//! timeout.
//!
//! # Features
//!
//! - Plain mutable configuration entity with typed accessors
//! - Bidirectional `key=value,key=value` headers string form
//! - Configurable via YAML, environment variables, or programmatic API
//! - Validation at the loading boundary
//!
//! This crate never constructs an exporter itself; transport, pipelines,
//! batching and retries belong to the OpenTelemetry SDK it configures.
//!
//! # Example
//!
//! ```
//! use otlp_exporter_config::{ExporterConfigBuilder, Protocol};
//!
//! # fn main() -> Result<(), otlp_exporter_config::ConfigError> {
//! let config = ExporterConfigBuilder::new()
//!     .service_name("checkout")
//!     .endpoint("http://localhost:4317")
//!     .protocol(Protocol::Grpc)
//!     .header("authorization", "Bearer token123")
//!     .build()?;
//!
//! assert_eq!(config.headers_as_string(), "authorization=Bearer token123");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;

// Re-export public API
pub use config::{ConfigLoader, ExporterConfig, ExporterConfigBuilder, Protocol};
pub use error::ConfigError;

// Initialize tracing subscriber for structured logging
use tracing_subscriber::EnvFilter;

/// Initialize structured logging
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
}
