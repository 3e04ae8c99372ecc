//! Token bucket limiter with a FIFO wait queue

use super::types::{BucketState, LimiterKey, Wake};
use crate::core::types::errors::{DispatchError, Result};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Interval between refill ticks
pub const REFILL_INTERVAL: Duration = Duration::from_secs(1);

/// Bounds the call rate to one endpoint
///
/// Bursts are bounded by `capacity`, sustained rate by `rate_per_second`.
/// Callers that find the bucket empty queue up and are released strictly in
/// arrival order as tokens are refilled.
#[derive(Debug)]
pub struct RateLimiter {
    key: LimiterKey,
    state: Mutex<BucketState>,
    refill_task: Mutex<Option<JoinHandle<()>>>,
}

impl RateLimiter {
    /// Create a limiter and start its once-per-second refill task
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(key: LimiterKey) -> Result<Arc<Self>> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            DispatchError::config(format!("Rate limiter for {} needs a tokio runtime: {}", key, e))
        })?;

        let limiter = Self::unscheduled(key)?;
        let weak = Arc::downgrade(&limiter);
        let handle = runtime.spawn(refill_loop(weak));
        *limiter.refill_task.lock() = Some(handle);

        info!("Rate limiter created for {}", limiter.key);
        Ok(limiter)
    }

    /// Create a limiter without a refill task; the owner drives [`Self::refill_tick`]
    pub fn unscheduled(key: LimiterKey) -> Result<Arc<Self>> {
        if key.capacity == 0 {
            return Err(DispatchError::config(format!(
                "Rate limiter capacity must be positive: {}",
                key
            )));
        }
        if key.rate_per_second == 0 {
            return Err(DispatchError::config(format!(
                "Rate limiter refill rate must be positive: {}",
                key
            )));
        }

        Ok(Arc::new(Self {
            state: Mutex::new(BucketState::full(key.capacity, key.rate_per_second)),
            key,
            refill_task: Mutex::new(None),
        }))
    }

    /// Wait for one unit of capacity and consume it
    ///
    /// Fails only if the limiter is disposed before or while waiting.
    /// Dropping the returned future abandons the place in the queue; a token
    /// granted to it but never observed is passed on to the next caller.
    pub async fn acquire(&self) -> Result<()> {
        let rx = {
            let mut state = self.state.lock();
            if state.disposed {
                return Err(self.disposed_error());
            }
            if state.tokens > 0 && state.waiters.is_empty() {
                state.tokens -= 1;
                return Ok(());
            }

            let (tx, rx) = oneshot::channel();
            state.waiters.push_back(tx);
            debug!(
                endpoint = %self.key.endpoint,
                queued = state.waiters.len(),
                "rate limiter empty, caller queued"
            );
            rx
        };

        let mut pending = PendingGrant {
            limiter: self,
            rx,
            observed: false,
        };
        let wake = (&mut pending.rx).await;
        pending.observed = true;

        match wake {
            Ok(Wake::Granted) => Ok(()),
            Ok(Wake::Disposed) | Err(_) => Err(self.disposed_error()),
        }
    }

    /// Put back a token that was granted to a caller who left
    ///
    /// The token goes to the next live waiter, or back into the bucket if
    /// nobody is queued.
    fn return_token(&self) {
        let mut state = self.state.lock();
        if state.disposed {
            return;
        }
        while let Some(waiter) = state.waiters.pop_front() {
            if waiter.send(Wake::Granted).is_ok() {
                return;
            }
        }
        state.tokens = state.tokens.saturating_add(1).min(state.capacity);
    }

    /// Take a token only if one is available right now
    pub fn try_acquire(&self) -> bool {
        let mut state = self.state.lock();
        if state.disposed || state.tokens == 0 || !state.waiters.is_empty() {
            return false;
        }
        state.tokens -= 1;
        true
    }

    /// Add `rate_per_second` tokens, then release queued callers in FIFO order
    ///
    /// Each release consumes one token. Waiters that have gone away are
    /// dropped from the queue without consuming a token. Returns the number
    /// of callers released.
    pub fn refill_tick(&self) -> usize {
        let mut state = self.state.lock();
        if state.disposed {
            return 0;
        }

        state.tokens = state
            .tokens
            .saturating_add(state.rate_per_second)
            .min(state.capacity);

        let mut released = 0;
        while state.tokens > 0 {
            let Some(waiter) = state.waiters.pop_front() else {
                break;
            };
            if waiter.send(Wake::Granted).is_ok() {
                state.tokens -= 1;
                released += 1;
            }
        }

        if released > 0 {
            debug!(
                endpoint = %self.key.endpoint,
                released,
                still_queued = state.waiters.len(),
                "rate limiter released callers"
            );
        }
        released
    }

    /// Stop refilling and release every queued caller with a disposal error
    ///
    /// Subsequent calls to [`Self::acquire`] fail immediately. Returns the
    /// number of callers that were waiting.
    pub fn dispose(&self) -> usize {
        if let Some(task) = self.refill_task.lock().take() {
            task.abort();
        }

        let waiters = {
            let mut state = self.state.lock();
            state.disposed = true;
            std::mem::take(&mut state.waiters)
        };

        let count = waiters.len();
        for waiter in waiters {
            let _ = waiter.send(Wake::Disposed);
        }
        if count > 0 {
            warn!(
                "Rate limiter for {} disposed with {} waiting callers",
                self.key, count
            );
        }
        count
    }

    pub fn key(&self) -> &LimiterKey {
        &self.key
    }

    pub fn capacity(&self) -> u32 {
        self.key.capacity
    }

    pub fn rate_per_second(&self) -> u32 {
        self.key.rate_per_second
    }

    /// Tokens currently in the bucket
    pub fn available_tokens(&self) -> u32 {
        self.state.lock().tokens
    }

    /// Callers currently waiting
    pub fn queued(&self) -> usize {
        self.state.lock().waiters.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    fn disposed_error(&self) -> DispatchError {
        DispatchError::LimiterDisposed(self.key.to_string())
    }
}

impl Drop for RateLimiter {
    fn drop(&mut self) {
        if let Some(task) = self.refill_task.get_mut().take() {
            task.abort();
        }
    }
}

/// A queued caller's receiver, returning an unobserved grant on drop
struct PendingGrant<'a> {
    limiter: &'a RateLimiter,
    rx: oneshot::Receiver<Wake>,
    observed: bool,
}

impl Drop for PendingGrant<'_> {
    fn drop(&mut self) {
        if self.observed {
            return;
        }
        // no grant can arrive after close, so try_recv sees the final state
        self.rx.close();
        if let Ok(Wake::Granted) = self.rx.try_recv() {
            debug!(
                endpoint = %self.limiter.key.endpoint,
                "abandoned caller's token handed back"
            );
            self.limiter.return_token();
        }
    }
}

/// Tick every [`REFILL_INTERVAL`] until the limiter goes away
async fn refill_loop(limiter: Weak<RateLimiter>) {
    let mut interval = tokio::time::interval(REFILL_INTERVAL);
    // the first tick completes immediately; the bucket already starts full
    interval.tick().await;
    loop {
        interval.tick().await;
        match limiter.upgrade() {
            Some(limiter) => {
                limiter.refill_tick();
            }
            None => break,
        }
    }
}
