//! Bounded retry policy for bus transactions.
//
// Only register writes are retried. Reads and every layer above the
// writer treat a failure as final.

use rand::Rng;
use std::time::Duration;

/// Defines a policy for retrying a bus write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. Total attempts are `max_retries + 1`.
    pub max_retries: u32,
    /// Base delay between attempts.
    pub backoff_delay: Duration,
    /// Upper bound of the random extra delay added to each backoff.
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_delay: Duration::from_millis(3),
            jitter: Duration::from_micros(500),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Total number of attempts a write may take.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay to sleep before the next attempt, base plus jitter.
    pub fn next_delay(&self) -> Duration {
        jittered(self.backoff_delay, self.jitter)
    }
}

/// `base` plus a uniformly random extra in `0..=window`.
pub fn jittered(base: Duration, window: Duration) -> Duration {
    let window_us = u64::try_from(window.as_micros()).unwrap_or(u64::MAX);
    if window_us == 0 {
        return base;
    }
    let extra = rand::thread_rng().gen_range(0..=window_us);
    base + Duration::from_micros(extra)
}
