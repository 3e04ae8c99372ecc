//! Rate Limiting Implementation
//!
//! Token bucket limiter shared per endpoint, refilled once per second, with
//! strictly FIFO release of callers that find the bucket empty.

mod limiter;
mod registry;
mod types;


// Re-export public types
pub use limiter::{REFILL_INTERVAL, RateLimiter};
pub use registry::RateLimiterRegistry;
pub use types::LimiterKey;

/// Bucket capacity applied automatically to sandbox endpoints
pub const SANDBOX_CAPACITY: u32 = 20;
/// Refill rate applied automatically to sandbox endpoints
pub const SANDBOX_RATE_PER_SECOND: u32 = 2;

/// Whether `endpoint` points at a sandbox (non-production) service
pub fn is_sandbox_endpoint(endpoint: &str) -> bool {
    endpoint.to_ascii_lowercase().contains("sandbox")
}
