//! Configuration loading tests

use crate::common::{ErrorAssertions, PRODUCTION_URL, SANDBOX_URL};
use mturk_dispatch::{DispatchConfig, Dispatcher, ErrorKind, RateLimitConfig, RateLimiterRegistry};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_dispatcher_from_config_file() {
    let file = write_config(
        r#"
service_url: "https://mechanicalturk.amazonaws.com/"
access_key_id: "AKID"
secret_access_key: "secret"
initial_retry_delay_ms: 500
max_retry_delay_ms: 4000
request_timeout_secs: 10
"#,
    );

    let config = DispatchConfig::from_file(file.path()).await.unwrap();
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert!(!config.is_sandbox());

    let dispatcher = Dispatcher::builder(config).build().unwrap();
    // 500, 1000, 2000 fit under the ceiling
    assert_eq!(dispatcher.backoff().max_attempts(), 4);
    assert!(dispatcher.limiter().is_none());
}

#[tokio::test]
async fn test_sandbox_file_gets_default_throttle() {
    let file = write_config(&format!(
        "service_url: \"{}\"\nsecret_access_key: \"secret\"\n",
        SANDBOX_URL
    ));

    let config = DispatchConfig::from_file(file.path()).await.unwrap();
    assert!(config.is_sandbox());

    let registry = Arc::new(RateLimiterRegistry::new());
    let first = Dispatcher::builder(config.clone())
        .limiters(registry.clone())
        .build()
        .unwrap();
    let second = Dispatcher::builder(config.clone())
        .limiters(registry.clone())
        .build()
        .unwrap();

    let limiter = first.limiter().unwrap();
    assert!(Arc::ptr_eq(limiter, second.limiter().unwrap()));
    assert_eq!(limiter.capacity(), 20);
    assert_eq!(limiter.rate_per_second(), 2);

    Dispatcher::builder(config)
        .build()
        .unwrap_err()
        .assert_kind(ErrorKind::Config);
}

#[tokio::test]
async fn test_explicit_rate_limit_applies_to_production() {
    let file = write_config(&format!(
        "service_url: \"{}\"\nsecret_access_key: \"secret\"\nrate_limit:\n  capacity: 5\n  rate_per_second: 1\n",
        PRODUCTION_URL
    ));

    let config = DispatchConfig::from_file(file.path()).await.unwrap();
    assert_eq!(config.rate_limit, Some(RateLimitConfig::new(5, 1)));

    let dispatcher = Dispatcher::builder(config)
        .limiters(Arc::new(RateLimiterRegistry::new()))
        .build()
        .unwrap();
    assert_eq!(dispatcher.limiter().unwrap().capacity(), 5);
}

#[tokio::test]
async fn test_zero_rate_limit_is_rejected() {
    let file = write_config(&format!(
        "service_url: \"{}\"\nrate_limit:\n  capacity: 0\n  rate_per_second: 1\n",
        PRODUCTION_URL
    ));

    let err = DispatchConfig::from_file(file.path()).await.unwrap_err();
    err.assert_kind(ErrorKind::Config);
}

#[test]
fn test_missing_secret_without_signer_fails_to_build() {
    let err = Dispatcher::builder(DispatchConfig::new(PRODUCTION_URL))
        .build()
        .unwrap_err();
    err.assert_kind(ErrorKind::Config);
}

#[test]
fn test_non_http_endpoint_fails_to_build() {
    let err = Dispatcher::builder(
        DispatchConfig::new("ftp://mechanicalturk.amazonaws.com/").with_credentials("AKID", "secret"),
    )
    .build()
    .unwrap_err();
    err.assert_kind(ErrorKind::Config);
}

#[test]
fn test_environment_lookup_builds_sandbox_config() {
    let config = DispatchConfig::from_lookup(|name| match name {
        "MTURK_SERVICE_URL" => Some(SANDBOX_URL.to_string()),
        "MTURK_ACCESS_KEY_ID" => Some("AKID".to_string()),
        "MTURK_SECRET_ACCESS_KEY" => Some("secret".to_string()),
        _ => None,
    })
    .unwrap();

    assert!(config.is_sandbox());
    assert_eq!(config.access_key_id, "AKID");
    assert_eq!(config.service_name, "AWSMechanicalTurkRequester");
    assert!(config.check().is_ok());
}
