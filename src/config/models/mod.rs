//! Configuration data models

pub mod dispatch;
pub mod rate_limit;

pub use dispatch::*;
pub use rate_limit::*;

/// Sandbox endpoint used when no service URL is configured
pub fn default_service_url() -> String {
    "https://mechanicalturk.sandbox.amazonaws.com/".to_string()
}

pub fn default_service_name() -> String {
    "AWSMechanicalTurkRequester".to_string()
}

pub fn default_service_version() -> String {
    "2014-08-15".to_string()
}

/// Default first retry delay in milliseconds
pub fn default_initial_retry_delay_ms() -> u64 {
    1000
}

/// Default retry ceiling in milliseconds
pub fn default_max_retry_delay_ms() -> u64 {
    8000
}

pub fn default_page_size() -> u32 {
    crate::core::marshal::DEFAULT_PAGE_SIZE
}

/// Default timeout in seconds
pub fn default_request_timeout_secs() -> u64 {
    30
}
