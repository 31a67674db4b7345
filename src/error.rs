//! Error types for the exporter configuration crate
//!
//! Defines the configuration error taxonomy with clear error messages
//! and context for debugging.

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Protocol string is not one of the recognized transport protocols
    #[error("Unsupported protocol: {0} (expected \"grpc\" or \"http/protobuf\")")]
    UnsupportedProtocol(String),

    /// Endpoint is not a usable collector URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Timeout value is out of range
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    /// Failed to read a configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a YAML configuration document
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
