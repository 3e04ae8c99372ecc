//! Exponential backoff for transient transport faults

use crate::config::DispatchConfig;
use std::time::Duration;

/// Doubling backoff bounded by a ceiling
///
/// Retrying stops as soon as the next delay would exceed the ceiling, so a
/// policy with initial delay `d` and ceiling `c` makes `floor(log2(c/d)) + 1`
/// attempts in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    initial: Duration,
    ceiling: Duration,
}

impl BackoffPolicy {
    pub fn new(initial: Duration, ceiling: Duration) -> Self {
        Self { initial, ceiling }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.initial_retry_delay(), config.max_retry_delay())
    }

    pub fn initial(&self) -> Duration {
        self.initial
    }

    pub fn ceiling(&self) -> Duration {
        self.ceiling
    }

    /// Fresh backoff state for one call
    pub fn start(&self) -> Backoff {
        Backoff {
            delay: self.initial,
            ceiling: self.ceiling,
            retries: 0,
        }
    }

    /// Total attempts a call makes when every attempt fails transiently
    pub fn max_attempts(&self) -> u32 {
        let mut backoff = self.start();
        while backoff.next_delay().is_some() {}
        backoff.retries() + 1
    }
}

/// Backoff state for one call
#[derive(Debug, Clone)]
pub struct Backoff {
    delay: Duration,
    ceiling: Duration,
    retries: u32,
}

impl Backoff {
    /// Delay to sleep before the next attempt, or `None` to give up
    ///
    /// A zero initial delay never retries.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.delay.is_zero() {
            return None;
        }
        let next = self.delay.checked_mul(2)?;
        if next > self.ceiling {
            return None;
        }
        let current = self.delay;
        self.delay = next;
        self.retries += 1;
        Some(current)
    }

    /// Retries granted so far
    pub fn retries(&self) -> u32 {
        self.retries
    }
}
