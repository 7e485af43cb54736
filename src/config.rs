//! Configuration for settlement polling behavior.

use std::time::Duration;

/// Controls how the engine polls the aggregator for cross-chain settlement.
///
/// The interval and attempt cap jointly bound the maximum wall-clock wait for
/// a single transfer. Use the builder methods to shrink both in tests.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use swapflow::PollingConfig;
///
/// // Use defaults (200 attempts, 3 second intervals)
/// let config = PollingConfig::default();
///
/// // Customize polling behavior
/// let config = PollingConfig::default()
///     .with_max_attempts(20)
///     .with_poll_interval(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Maximum number of status queries before giving up.
    pub max_attempts: u32,
    /// Time to wait between status queries.
    pub poll_interval: Duration,
}

impl Default for PollingConfig {
    /// Creates a polling configuration suitable for typical bridge routes.
    ///
    /// - `max_attempts`: 200
    /// - `poll_interval`: 3 seconds
    ///
    /// This bounds the wait at ~10 minutes, which accommodates the slowest
    /// commonly-routed cross-chain settlements.
    fn default() -> Self {
        Self {
            max_attempts: 200,
            poll_interval: Duration::from_secs(3),
        }
    }
}

impl PollingConfig {
    /// Sets the maximum number of status queries.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the interval between status queries.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Returns the total maximum wait time, `max_attempts * poll_interval`.
    pub fn total_timeout(&self) -> Duration {
        self.poll_interval * self.max_attempts
    }
}
