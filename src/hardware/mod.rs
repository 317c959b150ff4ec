//! Hardware capability traits.
//!
//! The register engine never talks to a bus directly. It is handed a
//! `TransferPort` for single register transactions, an optional `PowerControl`
//! for the power rails, and an `embedded_hal::delay::DelayNs` for every
//! blocking sleep. Real and mock implementations live in the submodules.
//!
//! # Available Implementations
//!
//! - `i2c::I2cTransport` - any `embedded_hal::i2c::I2c` bus
//! - `mock::MockBus` - recording bus with failure injection
//! - `mock::MockPower` - counts power transitions
//! - `mock::MockDelay` / `StdDelay` - recorded or real sleeps

pub mod i2c;
pub mod mock;

use embedded_hal::delay::DelayNs;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a single bus transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No adapter is attached to the port.
    #[error("no bus adapter present")]
    Unavailable,
    /// The transaction did not complete as exactly one operation.
    #[error("transaction incomplete: {0}")]
    Incomplete(String),
}

/// Single register transactions on the sensor's control bus.
///
/// Each call is exactly one bus transaction. Implementations must not retry;
/// retry policy belongs to `RegisterWriter`.
pub trait TransferPort {
    /// Read one byte from a 16-bit register address.
    fn read_register(&mut self, address: u16) -> Result<u8, TransportError>;

    /// Write one byte to a 16-bit register address.
    fn write_register(&mut self, address: u16, value: u8) -> Result<(), TransportError>;
}

impl<T: TransferPort + ?Sized> TransferPort for Box<T> {
    fn read_register(&mut self, address: u16) -> Result<u8, TransportError> {
        (**self).read_register(address)
    }

    fn write_register(&mut self, address: u16, value: u8) -> Result<(), TransportError> {
        (**self).write_register(address, value)
    }
}

/// Board-level power sequencing for the sensor.
pub trait PowerControl: Send + Sync {
    /// Bring up the sensor rails and clocks.
    fn power_on(&self);
    /// Cut the sensor rails.
    fn power_off(&self);
}

/// Blocking delay on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Sleep for `duration` through a `DelayNs`, saturating at `u32::MAX` microseconds.
pub fn sleep_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let us = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
    delay.delay_us(us);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_std_delay_blocks() {
        let start = Instant::now();
        sleep_for(&mut StdDelay, Duration::from_millis(2));
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn test_boxed_port_forwards() {
        let bus = mock::MockBus::new();
        let mut port: Box<dyn TransferPort> = Box::new(bus.clone());
        port.write_register(0x0100, 0x01).unwrap();
        assert_eq!(bus.writes(), vec![(0x0100, 0x01)]);
    }
}
