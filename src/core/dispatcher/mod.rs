//! Reliable request dispatch
//!
//! A [`Dispatcher`] normalises and wraps typed request items, then for each
//! attempt signs the envelope, waits on the endpoint's rate limiter and hands
//! it to the transport. Timeouts and HTTP 500/503 are retried with doubling
//! delays; everything else surfaces as exactly one typed error.

mod builder;
#[allow(clippy::module_inception)]
mod dispatcher;
pub mod retry;
pub mod timestamp;


pub use builder::DispatcherBuilder;
pub use dispatcher::{Clock, Dispatcher};
pub use retry::{Backoff, BackoffPolicy};
pub use timestamp::{TIMESTAMP_FORMAT, signing_timestamp};
