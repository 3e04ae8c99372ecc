//! Configuration validation
//!
//! - `endpoint`: service URL checks
//! - `dispatch_validators`: validators for the dispatcher configuration

mod dispatch_validators;
mod endpoint;

pub use endpoint::validate_endpoint_url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
