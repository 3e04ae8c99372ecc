//! Cryptographic helpers for request signing

pub mod hmac;
