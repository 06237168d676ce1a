//! Rate limiting implementation
//!
//! Uses the governor crate for token bucket rate limiting. A limiter built for
//! N requests per second starts with N permits and regains one every 1/N
//! seconds, never holding more than N.

use crate::context::Context;
use crate::error::Result;
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Token bucket rate limiter shared by every call made through one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    requests_per_second: NonZeroU32,
}

impl RateLimiter {
    /// Create a limiter for `requests_per_second`. Returns `None` for zero,
    /// which disables limiting.
    pub fn new(requests_per_second: u32) -> Option<Self> {
        let rps = NonZeroU32::new(requests_per_second)?;
        Some(Self {
            limiter: Arc::new(Governor::direct(Quota::per_second(rps))),
            requests_per_second: rps,
        })
    }

    /// Configured ceiling
    pub fn requests_per_second(&self) -> u32 {
        self.requests_per_second.get()
    }

    /// Wait for a permit, or fail with the context's error if it fires first.
    ///
    /// A permit is consumed only when this returns `Ok`.
    pub async fn acquire(&self, ctx: &Context) -> Result<()> {
        if ctx.is_done() {
            return Err(ctx.err());
        }
        tokio::select! {
            biased;
            () = ctx.done() => Err(ctx.err()),
            () = self.limiter.until_ready() => Ok(()),
        }
    }

    /// Try to take a permit without waiting
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("requests_per_second", &self.requests_per_second)
            .finish()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;
    use crate::error::{Cancelled, Error};
    use std::time::{Duration, Instant};

    #[test]
    fn test_rate_limiter_disabled_for_zero() {
        assert!(RateLimiter::new(0).is_none());
        assert_eq!(RateLimiter::new(5).unwrap().requests_per_second(), 5);
    }

    #[tokio::test]
    async fn test_rate_limiter_primed_with_full_bucket() {
        let limiter = RateLimiter::new(5).unwrap();

        for _ in 0..5 {
            assert!(limiter.try_acquire());
        }
        assert!(!limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_rate_limiter_acquire_within_burst_does_not_wait() {
        let limiter = RateLimiter::new(3).unwrap();
        let ctx = Context::background();

        let start = Instant::now();
        for _ in 0..3 {
            limiter.acquire(&ctx).await.unwrap();
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_rate_limiter_waits_for_replenishment() {
        let limiter = RateLimiter::new(2).unwrap();
        let ctx = Context::background();

        limiter.acquire(&ctx).await.unwrap();
        limiter.acquire(&ctx).await.unwrap();

        // One permit every 500ms
        let start = Instant::now();
        limiter.acquire(&ctx).await.unwrap();
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(350), "waited {waited:?}");
        assert!(waited < Duration::from_secs(2), "waited {waited:?}");
    }

    #[tokio::test]
    async fn test_rate_limiter_cancelled_context_takes_no_permit() {
        let limiter = RateLimiter::new(1).unwrap();
        let (ctx, handle) = Context::background().with_cancel();
        handle.cancel();

        let err = limiter.acquire(&ctx).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled(Cancelled::Cancelled)));
        assert!(limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_rate_limiter_timeout_while_waiting() {
        let limiter = RateLimiter::new(1).unwrap();
        assert!(limiter.try_acquire());

        let ctx = Context::background().with_timeout(Duration::from_millis(50));
        let start = Instant::now();
        let err = limiter.acquire(&ctx).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled(Cancelled::DeadlineExceeded)));
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
