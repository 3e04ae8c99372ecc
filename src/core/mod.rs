//! Core dispatch machinery
//!
//! - `marshal`: field inference, paging defaults, envelopes and result unwrapping
//! - `rate_limiter`: shared per-endpoint token buckets
//! - `traits`: transport and signer seams plus the error classifier
//! - `dispatcher`: the attempt loop tying it together
//! - `operations`: typed request and result records

pub mod dispatcher;
pub mod marshal;
pub mod operations;
pub mod rate_limiter;
pub mod traits;
pub mod types;
