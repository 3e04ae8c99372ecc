//! Common test utilities for mturk-dispatch
//!
//! - Scripted transport that replays canned replies
//! - Static signer and response factories
//! - Custom assertions on dispatch errors

pub mod fixtures;

// Re-export commonly used items
pub use assertions::ErrorAssertions;
pub use fixtures::{HitResponseFactory, ScriptedTransport, StaticSigner};

pub const PRODUCTION_URL: &str = "https://mechanicalturk.amazonaws.com/";
pub const SANDBOX_URL: &str = "https://mechanicalturk.sandbox.amazonaws.com/";
