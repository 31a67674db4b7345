//! Unit tests for environment variable configuration loading

use otlp_exporter_config::config::ConfigLoader;
use otlp_exporter_config::{ExporterConfigBuilder, Protocol};
use std::sync::Mutex;
use std::time::Duration;

// Mutex to serialize environment variable access across parallel tests
// Environment variables are process-wide, so parallel tests can interfere with each other
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn set_var(key: &str, value: &str) {
    // SAFETY: all env mutation in this binary happens under ENV_MUTEX
    unsafe { std::env::set_var(key, value) }
}

fn remove_var(key: &str) {
    // SAFETY: all env mutation in this binary happens under ENV_MUTEX
    unsafe { std::env::remove_var(key) }
}

/// Helper function to clear all OTel exporter environment variables
fn clear_otel_env_vars() {
    remove_var("OTEL_SERVICE_NAME");
    remove_var("OTEL_EXPORTER_OTLP_ENDPOINT");
    remove_var("OTEL_EXPORTER_OTLP_PROTOCOL");
    remove_var("OTEL_EXPORTER_OTLP_HEADERS");
    remove_var("OTEL_EXPORTER_OTLP_TIMEOUT");
}

#[test]
fn test_load_from_env_with_all_vars() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    set_var("OTEL_SERVICE_NAME", "checkout");
    set_var("OTEL_EXPORTER_OTLP_ENDPOINT", "https://collector.example.com:4317");
    set_var("OTEL_EXPORTER_OTLP_PROTOCOL", "http/protobuf");
    set_var("OTEL_EXPORTER_OTLP_HEADERS", "authorization=Bearer abc,x-tenant=acme");
    set_var("OTEL_EXPORTER_OTLP_TIMEOUT", "5000");

    let config = ConfigLoader::from_env().unwrap();

    assert_eq!(config.service_name, "checkout");
    assert_eq!(config.endpoint, "https://collector.example.com:4317");
    assert_eq!(config.protocol, Protocol::HttpProtobuf);
    assert_eq!(config.headers().len(), 2);
    assert_eq!(
        config.headers().get("authorization").map(String::as_str),
        Some("Bearer abc")
    );
    assert_eq!(
        config.headers().get("x-tenant").map(String::as_str),
        Some("acme")
    );
    assert_eq!(config.timeout(), Duration::from_millis(5000));

    clear_otel_env_vars();
}

#[test]
fn test_load_from_env_with_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    // Only set the endpoint, others should use defaults
    set_var("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317");

    let config = ConfigLoader::from_env().unwrap();

    assert_eq!(config.endpoint, "http://localhost:4317");
    assert_eq!(config.service_name, ""); // default
    assert_eq!(config.protocol, Protocol::Grpc); // default
    assert!(config.headers().is_empty()); // default
    assert_eq!(config.timeout(), Duration::from_secs(10)); // default

    clear_otel_env_vars();
}

#[test]
fn test_load_from_env_with_invalid_timeout() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    set_var("OTEL_EXPORTER_OTLP_TIMEOUT", "not_a_number");

    let config = ConfigLoader::from_env().unwrap();

    // Unparsable value is skipped, keeping the default
    assert_eq!(config.timeout(), Duration::from_secs(10));

    clear_otel_env_vars();
}

#[test]
fn test_load_from_env_with_unknown_protocol() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    set_var("OTEL_EXPORTER_OTLP_PROTOCOL", "http/json");

    let config = ConfigLoader::from_env().unwrap();

    // Unknown protocol names are skipped, keeping the default
    assert_eq!(config.protocol, Protocol::Grpc);

    clear_otel_env_vars();
}

#[test]
fn test_load_from_env_headers_drop_malformed_tokens() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    set_var("OTEL_EXPORTER_OTLP_HEADERS", "a=1,bad,c=3");

    let config = ConfigLoader::from_env().unwrap();

    assert_eq!(config.headers().len(), 2);
    assert_eq!(config.headers().get("a").map(String::as_str), Some("1"));
    assert_eq!(config.headers().get("c").map(String::as_str), Some("3"));

    clear_otel_env_vars();
}

#[test]
fn test_env_var_priority_over_provided_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    let provided_config = ExporterConfigBuilder::new()
        .service_name("from-code")
        .endpoint("http://collector.internal:4317")
        .build()
        .unwrap();

    set_var("OTEL_SERVICE_NAME", "from-env");

    let config = ConfigLoader::load(Some(provided_config)).unwrap();

    // Environment variable should override provided config
    assert_eq!(config.service_name, "from-env");
    // But endpoint from provided config should be used (env not set)
    assert_eq!(config.endpoint, "http://collector.internal:4317");

    clear_otel_env_vars();
}

#[test]
fn test_load_with_none_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    let config = ConfigLoader::load(None).unwrap();

    assert_eq!(config.service_name, "");
    assert_eq!(config.endpoint, "");
    assert_eq!(config.protocol, Protocol::Grpc);
    assert!(config.headers().is_empty());
    assert_eq!(config.timeout(), Duration::from_secs(10));

    clear_otel_env_vars();
}

#[test]
fn test_load_from_env_rejects_invalid_endpoint() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_otel_env_vars();

    set_var("OTEL_EXPORTER_OTLP_ENDPOINT", "ftp://collector.example.com");

    let result = ConfigLoader::from_env();

    // Endpoint overrides are applied verbatim and then validated
    assert!(result.is_err());

    clear_otel_env_vars();
}
