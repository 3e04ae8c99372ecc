//! Configuration loading utilities
//!
//! Environment variables use the `MTURK_` prefix. Values found in a `.env`
//! file are loaded first.

use super::models::*;
use crate::core::types::errors::{DispatchError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

pub const ENV_SERVICE_URL: &str = "MTURK_SERVICE_URL";
pub const ENV_ACCESS_KEY_ID: &str = "MTURK_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "MTURK_SECRET_ACCESS_KEY";
pub const ENV_SERVICE_NAME: &str = "MTURK_SERVICE_NAME";
pub const ENV_SERVICE_VERSION: &str = "MTURK_SERVICE_VERSION";
pub const ENV_INITIAL_RETRY_DELAY_MS: &str = "MTURK_INITIAL_RETRY_DELAY_MS";
pub const ENV_MAX_RETRY_DELAY_MS: &str = "MTURK_MAX_RETRY_DELAY_MS";
pub const ENV_DEFAULT_PAGE_SIZE: &str = "MTURK_DEFAULT_PAGE_SIZE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MTURK_REQUEST_TIMEOUT_SECS";
pub const ENV_RATE_LIMIT_CAPACITY: &str = "MTURK_RATE_LIMIT_CAPACITY";
pub const ENV_RATE_LIMIT_PER_SECOND: &str = "MTURK_RATE_LIMIT_PER_SECOND";

impl DispatchConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file from the working directory if present; variables
    /// already set in the process environment take precedence.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment file {:?}", path);
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_SERVICE_URL) {
            config.service_url = url;
        }
        if let Some(key) = lookup(ENV_ACCESS_KEY_ID) {
            config.access_key_id = key;
        }
        if let Some(secret) = lookup(ENV_SECRET_ACCESS_KEY) {
            config.secret_access_key = secret;
        }
        if let Some(name) = lookup(ENV_SERVICE_NAME) {
            config.service_name = name;
        }
        if let Some(version) = lookup(ENV_SERVICE_VERSION) {
            config.service_version = version;
        }
        if let Some(delay) = lookup(ENV_INITIAL_RETRY_DELAY_MS) {
            config.initial_retry_delay_ms = parse_var(ENV_INITIAL_RETRY_DELAY_MS, &delay)?;
        }
        if let Some(delay) = lookup(ENV_MAX_RETRY_DELAY_MS) {
            config.max_retry_delay_ms = parse_var(ENV_MAX_RETRY_DELAY_MS, &delay)?;
        }
        if let Some(size) = lookup(ENV_DEFAULT_PAGE_SIZE) {
            config.default_page_size = parse_var(ENV_DEFAULT_PAGE_SIZE, &size)?;
        }
        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            config.request_timeout_secs = parse_var(ENV_REQUEST_TIMEOUT_SECS, &timeout)?;
        }

        match (
            lookup(ENV_RATE_LIMIT_CAPACITY),
            lookup(ENV_RATE_LIMIT_PER_SECOND),
        ) {
            (Some(capacity), Some(rate)) => {
                config.rate_limit = Some(RateLimitConfig::new(
                    parse_var(ENV_RATE_LIMIT_CAPACITY, &capacity)?,
                    parse_var(ENV_RATE_LIMIT_PER_SECOND, &rate)?,
                ));
            }
            (None, None) => {}
            _ => {
                return Err(DispatchError::config(format!(
                    "{} and {} must be set together",
                    ENV_RATE_LIMIT_CAPACITY, ENV_RATE_LIMIT_PER_SECOND
                )));
            }
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DispatchError::config(format!("Invalid {}: {}", name, e)))
}
