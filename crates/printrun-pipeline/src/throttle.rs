//! Pacing between remote catalog attempts.
//!
//! The remote API enforces an undocumented request rate, so the orchestrator
//! pauses after every (design, product type) attempt. This is cooperative
//! pacing, not a retry: failed calls are never reattempted.

use std::future::Future;
use std::time::Duration;

/// Pause policy applied between remote attempts.
pub trait Throttle: Send + Sync {
    /// Waits before the next remote attempt may start.
    fn pause(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps a fixed interval after every attempt.
#[derive(Debug, Clone, Copy)]
pub struct FixedIntervalThrottle {
    interval: Duration,
}

impl FixedIntervalThrottle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Throttle for FixedIntervalThrottle {
    async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        tracing::trace!(interval = ?self.interval, "throttling");
        tokio::time::sleep(self.interval).await;
    }
}
