//! Request signing abstraction

use crate::core::types::errors::Result;

/// Computes the request signature for an operation at a given timestamp
///
/// Implementations hold the secret key and the service name; the signature
/// must be a pure function of those plus the two arguments.
#[cfg_attr(test, mockall::automock)]
pub trait Signer: Send + Sync {
    fn sign(&self, operation: &str, timestamp: &str) -> Result<String>;
}
