//! Rate limiter types and data structures

use std::collections::VecDeque;
use std::fmt;
use tokio::sync::oneshot;

/// Identifies one shared limiter: endpoint plus bucket shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LimiterKey {
    /// Service endpoint URL
    pub endpoint: String,
    /// Maximum burst size
    pub capacity: u32,
    /// Tokens added per refill tick (one tick per second)
    pub rate_per_second: u32,
}

impl LimiterKey {
    pub fn new(endpoint: impl Into<String>, capacity: u32, rate_per_second: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            capacity,
            rate_per_second,
        }
    }
}

impl fmt::Display for LimiterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (capacity {}, {}/s)",
            self.endpoint, self.capacity, self.rate_per_second
        )
    }
}

/// Outcome delivered to a queued caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Wake {
    Granted,
    Disposed,
}

/// Bucket counters and the FIFO wait queue, guarded by one lock
#[derive(Debug)]
pub(super) struct BucketState {
    /// Invariant: `tokens <= capacity`
    pub(super) tokens: u32,
    pub(super) capacity: u32,
    pub(super) rate_per_second: u32,
    pub(super) waiters: VecDeque<oneshot::Sender<Wake>>,
    pub(super) disposed: bool,
}

impl BucketState {
    pub(super) fn full(capacity: u32, rate_per_second: u32) -> Self {
        Self {
            tokens: capacity,
            capacity,
            rate_per_second,
            waiters: VecDeque::new(),
            disposed: false,
        }
    }
}
