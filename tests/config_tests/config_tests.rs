//! Tests for Config
//!
//! These tests verify:
//! - Defaults and the builder
//! - Reading REDIS_* settings through a lookup function
//! - Loading `.env` settings files

use std::collections::HashMap;
use std::io::Write;

use context_wrangler::config::{load_env_file, Config, HOST_VAR, PASSWORD_VAR, PORT_VAR};
use context_wrangler::WranglerError;
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn config_from(vars: &[(&str, &str)]) -> context_wrangler::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

// =============================================================================
// Defaults and Builder Tests
// =============================================================================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 6379);
    assert_eq!(config.password, None);
    assert_eq!(config.addr(), "localhost:6379");
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .host("redis.internal")
        .port(6380)
        .password(Some("s3cret".to_string()))
        .scan_count(500)
        .build();

    assert_eq!(config.host, "redis.internal");
    assert_eq!(config.port, 6380);
    assert_eq!(config.password.as_deref(), Some("s3cret"));
    assert_eq!(config.scan_count, 500);
}

#[test]
fn test_builder_scan_count_at_least_one() {
    let config = Config::builder().scan_count(0).build();

    assert_eq!(config.scan_count, 1);
}

// =============================================================================
// Environment Lookup Tests
// =============================================================================

#[test]
fn test_from_lookup_empty_environment_uses_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_from_lookup_reads_all_settings() {
    let config = config_from(&[
        (HOST_VAR, "10.0.0.5"),
        (PORT_VAR, "7000"),
        (PASSWORD_VAR, "hunter2"),
    ])
    .unwrap();

    assert_eq!(config.host, "10.0.0.5");
    assert_eq!(config.port, 7000);
    assert_eq!(config.password.as_deref(), Some("hunter2"));
}

#[test]
fn test_from_lookup_port_with_whitespace() {
    let config = config_from(&[(PORT_VAR, " 6390 ")]).unwrap();

    assert_eq!(config.port, 6390);
}

#[test]
fn test_from_lookup_empty_password_means_none() {
    let config = config_from(&[(PASSWORD_VAR, "")]).unwrap();

    assert_eq!(config.password, None);
}

#[test]
fn test_from_lookup_invalid_port() {
    let err = config_from(&[(PORT_VAR, "not-a-port")]).unwrap_err();

    assert!(matches!(err, WranglerError::Config(_)));
    assert!(err.to_string().contains(PORT_VAR));
}

#[test]
fn test_from_lookup_port_out_of_range() {
    let err = config_from(&[(PORT_VAR, "70000")]).unwrap_err();

    assert!(matches!(err, WranglerError::Config(_)));
}

// =============================================================================
// Settings File Tests
// =============================================================================

#[test]
fn test_load_env_file_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "CONTEXT_WRANGLER_TEST_ONLY_VAR=loaded").unwrap();

    let loaded = load_env_file(Some(file.path())).unwrap();

    assert_eq!(loaded.as_deref(), Some(file.path()));
    assert_eq!(
        std::env::var("CONTEXT_WRANGLER_TEST_ONLY_VAR").as_deref(),
        Ok("loaded")
    );
}

#[test]
fn test_load_env_file_missing_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.env");

    let err = load_env_file(Some(&missing)).unwrap_err();

    assert!(matches!(err, WranglerError::Config(_)));
}
