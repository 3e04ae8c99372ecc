//! Error types for the dispatch layer
//!
//! ## Layers
//!
//! - `ErrorRecord`: one `(code, message, data)` triple reported by the service
//! - `ServiceFault`: summary message plus every record of a failed call
//! - `DispatchError`: the single error type returned to callers, one variant
//!   per classified kind plus protocol-shape and transport faults
//!
//! Callers branch on the variant (or on [`ErrorKind`]) and never see partial
//! success: a call returns its typed results or exactly one error.

mod dispatch;
mod record;

pub use dispatch::{DispatchError, ErrorKind, Result};
pub use record::{ErrorData, ErrorRecord, ServiceFault, format_records};
