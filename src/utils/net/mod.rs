//! Network utilities

pub mod http;
