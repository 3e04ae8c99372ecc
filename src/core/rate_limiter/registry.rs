//! Shared limiter registry
//!
//! One [`RateLimiter`] exists per [`LimiterKey`]. The registry is an explicit
//! object owned by the application's composition root and handed to every
//! dispatcher that should share limiters.

use super::limiter::RateLimiter;
use super::types::LimiterKey;
use crate::core::types::errors::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of limiters keyed by endpoint and bucket shape
#[derive(Debug, Default)]
pub struct RateLimiterRegistry {
    limiters: RwLock<HashMap<LimiterKey, Arc<RateLimiter>>>,
}

impl RateLimiterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the limiter for `key`, creating it on first use
    ///
    /// Double-checked: a read-locked lookup first, then a re-check under the
    /// write lock so concurrent callers never construct two limiters.
    pub fn get_or_create(&self, key: &LimiterKey) -> Result<Arc<RateLimiter>> {
        if let Some(limiter) = self.limiters.read().get(key) {
            return Ok(limiter.clone());
        }

        let mut limiters = self.limiters.write();
        if let Some(limiter) = limiters.get(key) {
            return Ok(limiter.clone());
        }

        let limiter = RateLimiter::new(key.clone())?;
        limiters.insert(key.clone(), limiter.clone());
        debug!("Registered rate limiter for {}", key);
        Ok(limiter)
    }

    pub fn get(&self, key: &LimiterKey) -> Option<Arc<RateLimiter>> {
        self.limiters.read().get(key).cloned()
    }

    /// Remove the limiter for `key` and dispose it
    ///
    /// Returns `false` if no limiter was registered under `key`.
    pub fn dispose(&self, key: &LimiterKey) -> bool {
        let removed = self.limiters.write().remove(key);
        match removed {
            Some(limiter) => {
                limiter.dispose();
                true
            }
            None => false,
        }
    }

    /// Dispose every registered limiter
    pub fn dispose_all(&self) {
        let drained: Vec<_> = self.limiters.write().drain().collect();
        for (_, limiter) in drained {
            limiter.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.limiters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.limiters.read().is_empty()
    }
}
