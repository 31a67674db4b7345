//! Configuration loader
//!
//! Loads exporter configuration from YAML files, environment variables, or
//! the programmatic API. Priority: environment variables > provided config
//! > defaults.

use std::env;
use std::str::FromStr;

use crate::config::types::{ExporterConfig, Protocol};
use crate::error::ConfigError;
use tracing::{debug, info, warn};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn from_yaml(path: impl AsRef<std::path::Path>) -> Result<ExporterConfig, ConfigError> {
        let path = path.as_ref();
        info!(
            config_path = %path.display(),
            "Loading exporter configuration from YAML file"
        );

        let content = std::fs::read_to_string(path).map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Failed to read configuration file"
            );
            ConfigError::Io(e)
        })?;

        let mut config: ExporterConfig = serde_yaml::from_str(&content).map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Failed to parse YAML configuration"
            );
            ConfigError::Parse(e)
        })?;

        debug!(
            config_path = %path.display(),
            "Parsed YAML configuration successfully"
        );

        Self::apply_env_overrides(&mut config);

        config.validate().map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Configuration validation failed"
            );
            e
        })?;

        info!(
            config_path = %path.display(),
            service_name = %config.service_name,
            endpoint = %config.endpoint,
            protocol = %config.protocol,
            timeout_millis = config.timeout_millis,
            "Exporter configuration loaded and validated successfully"
        );

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<ExporterConfig, ConfigError> {
        info!("Loading exporter configuration from environment variables");

        let mut config = ExporterConfig::default();
        Self::apply_env_overrides(&mut config);

        config.validate().map_err(|e| {
            warn!(
                error = %e,
                "Configuration validation failed"
            );
            e
        })?;

        info!(
            service_name = %config.service_name,
            endpoint = %config.endpoint,
            protocol = %config.protocol,
            timeout_millis = config.timeout_millis,
            "Exporter configuration loaded from environment variables and validated successfully"
        );

        Ok(config)
    }

    /// Load configuration with priority: environment variables > provided config > defaults
    pub fn load(provided: Option<ExporterConfig>) -> Result<ExporterConfig, ConfigError> {
        if provided.is_some() {
            info!("Loading exporter configuration with provided config and environment variable overrides");
        } else {
            info!("Loading exporter configuration with defaults and environment variable overrides");
        }

        let mut config = provided.unwrap_or_default();

        Self::apply_env_overrides(&mut config);

        config.validate().map_err(|e| {
            warn!(
                error = %e,
                "Configuration validation failed"
            );
            e
        })?;

        info!(
            service_name = %config.service_name,
            endpoint = %config.endpoint,
            protocol = %config.protocol,
            timeout_millis = config.timeout_millis,
            "Exporter configuration loaded and validated successfully"
        );

        Ok(config)
    }

    /// Apply environment variable overrides to a configuration
    ///
    /// Reads the standard OpenTelemetry exporter variables. Unparsable
    /// values are logged and skipped, keeping the previous field value.
    fn apply_env_overrides(config: &mut ExporterConfig) {
        // OTEL_SERVICE_NAME
        if let Ok(name) = env::var("OTEL_SERVICE_NAME") {
            debug!(
                env_var = "OTEL_SERVICE_NAME",
                value = %name,
                "Applying environment variable override"
            );
            config.service_name = name;
        }

        // OTEL_EXPORTER_OTLP_ENDPOINT
        if let Ok(endpoint) = env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            debug!(
                env_var = "OTEL_EXPORTER_OTLP_ENDPOINT",
                value = %endpoint,
                "Applying environment variable override"
            );
            config.endpoint = endpoint;
        }

        // OTEL_EXPORTER_OTLP_PROTOCOL
        if let Ok(protocol) = env::var("OTEL_EXPORTER_OTLP_PROTOCOL") {
            match Protocol::from_str(&protocol) {
                Ok(p) => {
                    debug!(
                        env_var = "OTEL_EXPORTER_OTLP_PROTOCOL",
                        value = %p,
                        "Applying environment variable override"
                    );
                    config.protocol = p;
                }
                Err(e) => {
                    warn!(
                        env_var = "OTEL_EXPORTER_OTLP_PROTOCOL",
                        value = %protocol,
                        error = %e,
                        "Failed to parse environment variable, using default"
                    );
                }
            }
        }

        // OTEL_EXPORTER_OTLP_HEADERS
        if let Ok(headers) = env::var("OTEL_EXPORTER_OTLP_HEADERS") {
            debug!(
                env_var = "OTEL_EXPORTER_OTLP_HEADERS",
                value = %headers,
                "Applying environment variable override"
            );
            config.set_headers_from_string(&headers);
        }

        // OTEL_EXPORTER_OTLP_TIMEOUT (milliseconds)
        if let Ok(timeout) = env::var("OTEL_EXPORTER_OTLP_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(millis) => {
                    debug!(
                        env_var = "OTEL_EXPORTER_OTLP_TIMEOUT",
                        value = millis,
                        "Applying environment variable override"
                    );
                    config.timeout_millis = millis;
                }
                Err(e) => {
                    warn!(
                        env_var = "OTEL_EXPORTER_OTLP_TIMEOUT",
                        value = %timeout,
                        error = %e,
                        "Failed to parse environment variable, using default"
                    );
                }
            }
        }
    }
}
