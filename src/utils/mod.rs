//! Bundled collaborators and helpers
//!
//! - **auth**: HMAC request signing
//! - **net**: HTTP transport
//! - **logging**: subscriber setup

pub mod auth;
pub mod logging;
pub mod net;

pub use auth::crypto::hmac::{HmacSigner, SignatureAlgorithm};
pub use logging::{LogFormat, LogLevel, init_logging};
pub use net::http::HttpTransport;
