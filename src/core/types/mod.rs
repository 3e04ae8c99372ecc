//! Shared types

pub mod errors;

pub use errors::{DispatchError, ErrorKind, ErrorRecord, Result, ServiceFault};
