//! # mturk-dispatch
//!
//! Reliable dispatch layer for a task-marketplace (Mechanical Turk style)
//! requester API.
//!
//! ## Features
//!
//! - **Typed requests**: operation records with was-set tracking for optional fields
//! - **Envelope marshalling**: batching same-type items into one signed call
//! - **Throttling**: a shared token-bucket limiter per endpoint with FIFO waiters
//! - **Retries**: exponential backoff on timeouts and HTTP 500/503
//! - **Typed errors**: service error codes classified into one error enum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mturk_dispatch::{DispatchConfig, Dispatcher, RateLimiterRegistry};
//! use mturk_dispatch::core::operations::{CreateHitRequest, Price};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DispatchConfig::from_env()?;
//!     let dispatcher = Dispatcher::builder(config)
//!         .limiters(Arc::new(RateLimiterRegistry::new()))
//!         .build()?;
//!
//!     let mut request = CreateHitRequest::default();
//!     *request.title = "Tag these images".to_string();
//!     *request.reward = Price::usd(0.25);
//!     *request.max_assignments = 3;
//!
//!     let hit = dispatcher.send_one(request).await?;
//!     println!("Created {}", hit.hit_id);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{DispatchConfig, RateLimitConfig};
pub use core::dispatcher::{Dispatcher, DispatcherBuilder};
pub use core::marshal::{OperationRegistry, RequestItem, Specified};
pub use core::rate_limiter::{LimiterKey, RateLimiter, RateLimiterRegistry};
pub use core::traits::{ErrorClassifier, HttpResponseInfo, Signer, Transport, TransportFault};
pub use core::types::errors::{DispatchError, ErrorKind, ErrorRecord, Result, ServiceFault};
pub use utils::{HmacSigner, HttpTransport};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
