//! Integration tests for mturk-dispatch
//!
//! These tests drive the public API across module boundaries.

pub mod config_tests;
pub mod dispatcher_tests;
pub mod http_transport_tests;
pub mod rate_limiter_tests;
