//! Tokio-based clock implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::traits::Clock;

/// Production clock using the real system clock and Tokio's async sleep.
///
/// For testing, use [`FakeClock`](crate::testing::FakeClock) instead, which
/// fast-forwards through poll intervals without actually waiting.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
