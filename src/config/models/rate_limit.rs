//! Rate limiting configuration

use serde::{Deserialize, Serialize};

/// Explicit limiter settings for the configured endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Bucket size
    pub capacity: u32,
    /// Tokens added per refill tick
    pub rate_per_second: u32,
}

impl RateLimitConfig {
    pub fn new(capacity: u32, rate_per_second: u32) -> Self {
        Self {
            capacity,
            rate_per_second,
        }
    }

    /// Settings applied automatically to sandbox endpoints
    pub fn sandbox() -> Self {
        Self::new(
            crate::core::rate_limiter::SANDBOX_CAPACITY,
            crate::core::rate_limiter::SANDBOX_RATE_PER_SECOND,
        )
    }
}
