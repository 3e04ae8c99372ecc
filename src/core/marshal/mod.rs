//! Generic request marshalling
//!
//! Works uniformly across operation shapes without per-operation code:
//!
//! - `specified` - optional fields with was-set flags and zero-value inference
//! - `paging` - page size / page number defaults
//! - `envelope` - wrapping items into an envelope, unwrapping results
//! - `registry` - operation, envelope and result-field naming

pub mod envelope;
pub mod paging;
pub mod registry;
pub mod specified;


pub use envelope::{Envelope, decode_items, item_errors, response_errors, unwrap};
pub use paging::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Paging};
pub use registry::{OperationRegistry, OperationSchema};
pub use specified::{Specified, ZeroValue};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A typed request item for one operation
///
/// The wire type name drives envelope and result-field naming; the
/// [`ZeroValue`] impl (usually from [`optional_fields!`](crate::optional_fields))
/// drives field inference.
pub trait RequestItem: ZeroValue + Serialize + Send + Sync + 'static {
    /// Wire type name, `<Operation>Request`
    const TYPE_NAME: &'static str;

    /// One result item of the operation
    type Output: DeserializeOwned + Send + 'static;

    /// Paging fields, for list-style operations
    fn paging(&mut self) -> Option<Paging<'_>> {
        None
    }
}

/// Prepare an item for sending
///
/// Raises was-set flags for every optional field holding a non-zero value,
/// then applies paging defaults. Running it again leaves the item unchanged.
pub fn normalize<I: RequestItem>(item: &mut I, default_page_size: u32) {
    item.infer_specified();
    if let Some(paging) = item.paging() {
        paging.apply_defaults(default_page_size);
    }
}
