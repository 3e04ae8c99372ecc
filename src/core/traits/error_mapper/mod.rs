//! Service error classification
//!
//! Converts the error records a service reports for a call into one typed
//! [`DispatchError`](crate::core::types::errors::DispatchError).
//!
//! # Module Structure
//!
//! - `rules` - Ordered rule table mapping code sets to error kinds
//! - `classifier` - The classifier applying a rule table
//! - `tests` - Classification test suite

pub mod classifier;
pub mod rules;

pub use classifier::ErrorClassifier;
pub use rules::{ClassificationRule, STANDARD_RULES};
