//! Shared rate limiter tests under concurrent load

use crate::common::SANDBOX_URL;
use mturk_dispatch::{ErrorKind, LimiterKey, RateLimiter, RateLimiterRegistry};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn sandbox_key() -> LimiterKey {
    LimiterKey::new(SANDBOX_URL, 20, 2)
}

#[tokio::test(start_paused = true)]
async fn test_sustained_rate_after_burst() {
    let limiter = RateLimiter::new(sandbox_key()).unwrap();
    let start = Instant::now();

    for _ in 0..30 {
        limiter.acquire().await.unwrap();
    }

    // 20 from the full bucket, 10 more at 2 per second
    assert!(start.elapsed() >= Duration::from_secs(5));
    assert!(start.elapsed() < Duration::from_secs(6));
    assert_eq!(limiter.available_tokens(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_waiters_released_in_arrival_order() {
    let limiter = RateLimiter::new(LimiterKey::new(SANDBOX_URL, 1, 1)).unwrap();
    limiter.acquire().await.unwrap();

    let order = Arc::new(Mutex::new(Vec::new()));
    let mut handles = Vec::new();
    for i in 0..5 {
        let task_limiter = limiter.clone();
        let order = order.clone();
        handles.push(tokio::spawn(async move {
            task_limiter.acquire().await.unwrap();
            order.lock().push(i);
        }));
        // let each task enqueue before spawning the next
        tokio::task::yield_now().await;
        while limiter.queued() < i + 1 {
            tokio::task::yield_now().await;
        }
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(*order.lock(), vec![0, 1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn test_tokens_never_exceed_capacity() {
    let limiter = RateLimiter::new(LimiterKey::new(SANDBOX_URL, 3, 2)).unwrap();
    limiter.acquire().await.unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(limiter.available_tokens(), 3);
}

#[tokio::test]
async fn test_registry_hands_out_one_limiter_per_key() {
    let registry = Arc::new(RateLimiterRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.get_or_create(&sandbox_key()).unwrap() })
        })
        .collect();

    let mut limiters = Vec::new();
    for handle in handles {
        limiters.push(handle.await.unwrap());
    }

    assert!(limiters.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(registry.len(), 1);

    let other = registry
        .get_or_create(&LimiterKey::new(SANDBOX_URL, 10, 1))
        .unwrap();
    assert!(!Arc::ptr_eq(&limiters[0], &other));
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn test_dispose_releases_waiters_with_error() {
    let registry = RateLimiterRegistry::new();
    let limiter = registry
        .get_or_create(&LimiterKey::new(SANDBOX_URL, 1, 1))
        .unwrap();
    limiter.acquire().await.unwrap();

    let waiter = {
        let limiter = limiter.clone();
        tokio::spawn(async move { limiter.acquire().await })
    };
    while limiter.queued() == 0 {
        tokio::task::yield_now().await;
    }

    assert!(registry.dispose(&LimiterKey::new(SANDBOX_URL, 1, 1)));

    let err = waiter.await.unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LimiterDisposed);
    assert!(limiter.is_disposed());
    assert_eq!(
        limiter.acquire().await.unwrap_err().kind(),
        ErrorKind::LimiterDisposed
    );
    assert!(registry.is_empty());
}
