//! Dispatcher configuration validators

use super::Validate;
use super::endpoint::validate_endpoint_url;
use crate::config::models::*;
use crate::core::marshal::MAX_PAGE_SIZE;
use tracing::warn;

impl Validate for DispatchConfig {
    fn validate(&self) -> Result<(), String> {
        validate_endpoint_url(&self.service_url, "Service URL")?;

        if self.service_name.is_empty() {
            return Err("Service name cannot be empty".to_string());
        }

        if self.initial_retry_delay_ms == 0 {
            return Err("Initial retry delay must be greater than 0".to_string());
        }

        if self.max_retry_delay_ms < self.initial_retry_delay_ms {
            warn!(
                "Max retry delay {}ms is below the initial delay {}ms; calls will not be retried",
                self.max_retry_delay_ms, self.initial_retry_delay_ms
            );
        }

        if self.default_page_size == 0 {
            return Err("Default page size must be greater than 0".to_string());
        }

        if self.default_page_size > MAX_PAGE_SIZE {
            warn!(
                "Default page size {} exceeds {}; it will be capped",
                self.default_page_size, MAX_PAGE_SIZE
            );
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }

        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Rate limit capacity must be greater than 0".to_string());
        }

        if self.rate_per_second == 0 {
            return Err("Rate limit rate must be greater than 0".to_string());
        }

        Ok(())
    }
}
