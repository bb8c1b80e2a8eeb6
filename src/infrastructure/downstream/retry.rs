//! # Retry Policy
//!
//! Bounded fixed-delay retry configuration for downstream calls.

use std::time::Duration;

/// Retry configuration for downstream calls.
///
/// A request gets one initial attempt plus up to `max_retries` retries,
/// sleeping `delay` before each retry. The delay is fixed, not exponential:
/// the downstream stores answer fast when healthy, and the point is to ride
/// out a brief blip rather than to shed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given retry budget and delay.
    #[must_use]
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns the maximum number of retries after the initial attempt.
    #[inline]
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the delay before each retry.
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the total number of attempts the policy allows.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

impl Default for RetryPolicy {
    /// Three retries with a one second fixed delay.
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}
