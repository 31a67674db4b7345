//! Configuration type definitions
//!
//! Defines the exporter configuration entity, the transport protocol
//! enumeration, and the programmatic builder.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

/// Transport protocol used to deliver telemetry to the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Protocol {
    /// OTLP over gRPC
    #[serde(rename = "grpc")]
    Grpc,
    /// OTLP over HTTP with binary Protobuf payloads
    #[serde(rename = "http/protobuf")]
    HttpProtobuf,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Grpc
    }
}

impl Protocol {
    /// Canonical wire name of this protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grpc => "grpc",
            Self::HttpProtobuf => "http/protobuf",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    /// Parse a protocol name, ignoring surrounding whitespace and ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grpc" => Ok(Self::Grpc),
            "http/protobuf" => Ok(Self::HttpProtobuf),
            _ => Err(ConfigError::UnsupportedProtocol(s.trim().to_string())),
        }
    }
}

/// Configuration consumed by an OTLP exporter initializer
///
/// Holds the settings an exporter needs to reach a collector: the emitting
/// service name, the collector endpoint, the transport protocol, custom
/// request headers (for example auth headers) and the export timeout. The
/// entity itself performs no I/O and constructs no exporter; an external
/// OpenTelemetry SDK initializer reads these fields.
///
/// # Configuration Sources
///
/// Configuration can be loaded from:
/// - YAML files
/// - Environment variables (standard `OTEL_*` exporter variables)
/// - Programmatic API (using [`ExporterConfigBuilder`])
///
/// # Default Values
///
/// - `service_name`: empty
/// - `endpoint`: empty (the consuming SDK picks its own default)
/// - `protocol`: `grpc`
/// - `headers`: empty map
/// - `timeout_millis`: `10_000` (10 seconds)
///
/// # Example
///
/// ```
/// use otlp_exporter_config::ExporterConfig;
///
/// let mut config = ExporterConfig::default();
/// config.set_headers_from_string("authorization=Bearer token123");
/// assert_eq!(config.headers_as_string(), "authorization=Bearer token123");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExporterConfig {
    /// Name of the service emitting telemetry; free-form text
    #[serde(default)]
    pub service_name: String,

    /// Collector endpoint URL
    ///
    /// Field mutation performs no validation; [`ExporterConfig::validate`]
    /// checks a non-empty endpoint at the loading boundary.
    #[serde(default)]
    pub endpoint: String,

    /// Transport protocol (default: gRPC)
    #[serde(default)]
    pub protocol: Protocol,

    /// Custom headers to pass to the collector, for example auth headers
    #[serde(default)]
    headers: HashMap<String, String>,

    /// Export timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            endpoint: String::new(),
            protocol: Protocol::default(),
            headers: HashMap::new(),
            timeout_millis: default_timeout_millis(),
        }
    }
}

impl ExporterConfig {
    /// Shared view of the custom headers map
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to the custom headers map
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Replace the headers map wholesale
    pub fn set_headers(&mut self, headers: HashMap<String, String>) {
        self.headers = headers;
    }

    /// Export timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }

    /// Set the export timeout (millisecond resolution)
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout_millis = timeout.as_millis() as u64;
    }

    /// Serialize the headers map to its `key1=value1,key2=value2` string form
    ///
    /// Keys and values are trimmed of surrounding whitespace and emitted in
    /// map-iteration order; an empty map yields an empty string. `=` and `,`
    /// inside keys or values are not escaped, so such values do not survive
    /// a round trip through the string form.
    pub fn headers_as_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.headers {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(name.trim());
            out.push('=');
            out.push_str(value.trim());
        }
        out
    }

    /// Repopulate the headers map from its `key1=value1,key2=value2` string form
    ///
    /// The map is cleared first. Each comma-separated token is split on the
    /// first `=` only, so values may themselves contain `=`; keys and values
    /// are trimmed of surrounding whitespace. Tokens without an `=` are
    /// silently dropped. An empty input yields an empty map.
    pub fn set_headers_from_string(&mut self, raw: &str) {
        self.headers.clear();
        for token in raw.split(',') {
            if let Some((name, value)) = token.split_once('=') {
                self.headers
                    .insert(name.trim().to_string(), value.trim().to_string());
            }
        }
    }

    /// Validate configuration values
    ///
    /// Called by [`ExporterConfigBuilder::build`] and the loader; plain
    /// field mutation stays unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.is_empty() {
            let url = Url::parse(&self.endpoint)
                .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::InvalidEndpoint(format!(
                    "endpoint must use http:// or https:// scheme, got {}",
                    self.endpoint
                )));
            }
        }

        if self.timeout_millis == 0 {
            return Err(ConfigError::InvalidTimeout(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for creating exporter configurations programmatically
#[derive(Debug, Default)]
pub struct ExporterConfigBuilder {
    config: ExporterConfig,
}

impl ExporterConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ExporterConfig::default(),
        }
    }

    /// Set the service name
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Set the collector endpoint URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the transport protocol
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.config.protocol = protocol;
        self
    }

    /// Add a single custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the headers map wholesale
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.config.headers = headers;
        self
    }

    /// Set the export timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.set_timeout(timeout);
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<ExporterConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// Default value functions
fn default_timeout_millis() -> u64 {
    10_000
}
