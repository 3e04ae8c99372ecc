//! Authentication utilities

pub mod crypto;
