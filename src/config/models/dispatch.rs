//! Dispatcher configuration

use super::*;
use crate::core::rate_limiter::{LimiterKey, is_sandbox_endpoint};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for one dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Service endpoint URL
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Credential id attached to every envelope
    #[serde(default)]
    pub access_key_id: String,
    /// Secret for the bundled HMAC signer
    #[serde(default, skip_serializing)]
    pub secret_access_key: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    /// First backoff delay
    #[serde(default = "default_initial_retry_delay_ms")]
    pub initial_retry_delay_ms: u64,
    /// Backoff stops once the next delay would exceed this
    #[serde(default = "default_max_retry_delay_ms")]
    pub max_retry_delay_ms: u64,
    /// Page size for list operations that set no paging fields
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Explicit limiter; sandbox endpoints get one regardless
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            service_name: default_service_name(),
            service_version: default_service_version(),
            initial_retry_delay_ms: default_initial_retry_delay_ms(),
            max_retry_delay_ms: default_max_retry_delay_ms(),
            default_page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            rate_limit: None,
        }
    }
}

impl DispatchConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Default::default()
        }
    }

    /// Set credentials
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = access_key_id.into();
        self.secret_access_key = secret_access_key.into();
        self
    }

    /// Set backoff delays in milliseconds
    pub fn with_retry_delays(mut self, initial_ms: u64, max_ms: u64) -> Self {
        self.initial_retry_delay_ms = initial_ms;
        self.max_retry_delay_ms = max_ms;
        self
    }

    pub fn with_rate_limit(mut self, capacity: u32, rate_per_second: u32) -> Self {
        self.rate_limit = Some(RateLimitConfig::new(capacity, rate_per_second));
        self
    }

    pub fn with_default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn initial_retry_delay(&self) -> Duration {
        Duration::from_millis(self.initial_retry_delay_ms)
    }

    pub fn max_retry_delay(&self) -> Duration {
        Duration::from_millis(self.max_retry_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_sandbox(&self) -> bool {
        is_sandbox_endpoint(&self.service_url)
    }

    /// Limiter for this endpoint, if any
    ///
    /// An explicit `rate_limit` wins; otherwise sandbox endpoints get the
    /// sandbox settings and production endpoints get none.
    pub fn limiter_key(&self) -> Option<LimiterKey> {
        let limits = match self.rate_limit {
            Some(limits) => limits,
            None if self.is_sandbox() => RateLimitConfig::sandbox(),
            None => return None,
        };
        Some(LimiterKey::new(
            self.service_url.clone(),
            limits.capacity,
            limits.rate_per_second,
        ))
    }
}
