//! Retrying register access on top of a `TransferPort`.
//!
//! `RegisterWriter` is the only place in the crate that retries. A write that
//! fails as an incomplete transaction is re-issued up to
//! `RetryPolicy::max_retries` more times, sleeping `backoff + jitter` between
//! attempts. A missing adapter is reported at once. Reads are never retried.

use embedded_hal::delay::DelayNs;
use std::time::Duration;
use tracing::warn;

use crate::error::{SensorError, SensorResult};
use crate::error_recovery::{jittered, RetryPolicy};
use crate::hardware::{sleep_for, TransferPort, TransportError};

/// Jitter window added to table `WAIT` delays.
pub const DEFAULT_SETTLE_JITTER: Duration = Duration::from_micros(500);

/// Register access with bounded write retry.
pub struct RegisterWriter<P, D> {
    port: P,
    delay: D,
    policy: RetryPolicy,
    settle_jitter: Duration,
}

impl<P: TransferPort, D: DelayNs> RegisterWriter<P, D> {
    /// Create a writer with the default retry policy.
    pub fn new(port: P, delay: D) -> Self {
        Self::with_policy(port, delay, RetryPolicy::default())
    }

    /// Create a writer with an explicit retry policy.
    pub fn with_policy(port: P, delay: D, policy: RetryPolicy) -> Self {
        Self {
            port,
            delay,
            policy,
            settle_jitter: DEFAULT_SETTLE_JITTER,
        }
    }

    /// Override the jitter window used by `settle`.
    pub fn with_settle_jitter(mut self, jitter: Duration) -> Self {
        self.settle_jitter = jitter;
        self
    }

    /// Write one byte, retrying incomplete transactions.
    pub fn write(&mut self, address: u16, value: u8) -> SensorResult<()> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.port.write_register(address, value) {
                Ok(()) => return Ok(()),
                Err(TransportError::Unavailable) => return Err(SensorError::TransportUnavailable),
                Err(TransportError::Incomplete(reason)) => {
                    if attempt >= max_attempts {
                        return Err(SensorError::TransferFailed {
                            address,
                            attempts: attempt,
                            reason,
                        });
                    }
                    warn!(
                        "transfer failed, retrying 0x{:04X}=0x{:02X} (attempt {}/{}): {}",
                        address, value, attempt, max_attempts, reason
                    );
                    let backoff = self.policy.next_delay();
                    sleep_for(&mut self.delay, backoff);
                }
            }
        }
    }

    /// Read one byte. Single attempt.
    pub fn read(&mut self, address: u16) -> SensorResult<u8> {
        self.port.read_register(address).map_err(|err| match err {
            TransportError::Unavailable => SensorError::TransportUnavailable,
            TransportError::Incomplete(reason) => SensorError::TransferFailed {
                address,
                attempts: 1,
                reason,
            },
        })
    }

    /// Block for `ms` milliseconds plus the settle jitter.
    pub fn settle(&mut self, ms: u16) {
        let duration = jittered(Duration::from_millis(u64::from(ms)), self.settle_jitter);
        sleep_for(&mut self.delay, duration);
    }
}
