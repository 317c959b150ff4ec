//! Custom error types for the sensor control plane.
//!
//! This module defines the primary error type, `SensorError`, returned by every
//! operation that touches the sensor. Using the `thiserror` crate, it gives each
//! failure class a distinct variant so callers can tell a missing bus apart from
//! a flaky one, or a bad resolution request apart from a busy device.
//!
//! ## Error Hierarchy
//!
//! - **`TransportUnavailable`**: No bus adapter is present. Fatal, never retried.
//! - **`TransferFailed`**: A bus transaction did not complete. Writes reach this
//!   only after the retry budget in `RegisterWriter` is spent; reads are
//!   single-attempt.
//! - **`InvalidResolution`**: The requested (width, height) pair has no register
//!   table. Raised before any bus traffic.
//! - **`AlreadyInUse`**: The session admission gate is already held.
//! - **`MissingCapability`**: A required collaborator (power control) is absent.
//! - **`NotAcquired`**: A device operation was called on a session nobody holds.
//!
//! No layer above `RegisterWriter` retries or rolls back. After any error the
//! physical device state should be treated as indeterminate.

use thiserror::Error;

/// Convenience alias for results using the sensor error type.
pub type SensorResult<T> = std::result::Result<T, SensorError>;

/// Every failure a sensor operation can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// No bus adapter is attached.
    #[error("Transport unavailable: no bus adapter present")]
    TransportUnavailable,

    /// A bus transaction did not complete.
    #[error("Transfer failed at register 0x{address:04X} after {attempts} attempt(s): {reason}")]
    TransferFailed {
        /// Register the transaction targeted.
        address: u16,
        /// Attempts made, including the first.
        attempts: u32,
        /// Transport's description of the last failure.
        reason: String,
    },

    /// No register table exists for the requested resolution.
    #[error("Invalid resolution {width}x{height}: no register table for this mode")]
    InvalidResolution {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The admission gate is held by another caller.
    #[error("Sensor session is already in use")]
    AlreadyInUse,

    /// The session was not acquired before a device operation.
    #[error("Sensor session has not been acquired")]
    NotAcquired,

    /// A required collaborator is not configured.
    #[error("Missing capability: {0}")]
    MissingCapability(&'static str),
}

impl SensorError {
    /// Whether the error came from the bus rather than from request validation
    /// or session bookkeeping.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SensorError::TransportUnavailable | SensorError::TransferFailed { .. }
        )
    }
}
