//! Mock Hardware Implementations
//!
//! Provides simulated sensor hardware for testing and dry runs without a board.
//! All mocks are cheap cloneable handles around shared state, so a test can keep
//! one handle for inspection after moving another into a `SensorSession`.
//!
//! # Available Mocks
//!
//! - `MockBus` - Recording register bus with failure injection
//! - `MockPower` - Counts power-on/power-off transitions
//! - `MockDelay` - Records requested sleeps instead of sleeping

use embedded_hal::delay::DelayNs;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::{PowerControl, TransferPort, TransportError};

// =============================================================================
// MockBus - Recording Register Bus
// =============================================================================

/// One completed bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum BusOp {
    /// `value` written to `address`.
    Write {
        /// Register address.
        address: u16,
        /// Byte written.
        value: u8,
    },
    /// `value` read back from `address`.
    Read {
        /// Register address.
        address: u16,
        /// Byte returned.
        value: u8,
    },
}

#[derive(Debug, Default)]
struct BusState {
    ops: Vec<BusOp>,
    registers: HashMap<u16, u8>,
    write_attempts: u32,
    read_attempts: u32,
    /// Every attempt fails once this many writes have completed.
    fail_write_at: Option<usize>,
    failing_write_addresses: HashSet<u16>,
    failing_read_addresses: HashSet<u16>,
    /// Remaining write attempts that fail before the bus recovers.
    transient_write_failures: u32,
    detached: bool,
}

impl BusState {
    fn completed_writes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, BusOp::Write { .. }))
            .count()
    }
}

/// Simulated register bus.
///
/// Only successful transactions are recorded in `ops()`; failed attempts are
/// visible through `write_attempts()` / `read_attempts()`. Unwritten registers
/// read back as `0x00`.
///
/// # Example
///
/// ```rust
/// use imx091_ctl::hardware::mock::MockBus;
/// use imx091_ctl::hardware::TransferPort;
///
/// let bus = MockBus::new().with_register(0x3580, 0xAB);
/// let mut port = bus.clone();
/// assert_eq!(port.read_register(0x3580).unwrap(), 0xAB);
/// port.write_register(0x0100, 0x01).unwrap();
/// assert_eq!(bus.writes(), vec![(0x0100, 0x01)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    state: Arc<Mutex<BusState>>,
}

impl MockBus {
    /// Create an attached bus with all registers at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, BusState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Preload a register value.
    pub fn with_register(self, address: u16, value: u8) -> Self {
        self.set_register(address, value);
        self
    }

    /// Set a register value without recording a bus operation.
    pub fn set_register(&self, address: u16, value: u8) {
        self.state().registers.insert(address, value);
    }

    /// Current register value as the sensor would report it.
    pub fn register(&self, address: u16) -> u8 {
        self.state().registers.get(&address).copied().unwrap_or(0)
    }

    /// Fail every write attempt once `completed` writes have gone through.
    pub fn fail_write_at(&self, completed: usize) {
        self.state().fail_write_at = Some(completed);
    }

    /// Fail every write attempt to `address`.
    pub fn fail_writes_to(&self, address: u16) {
        self.state().failing_write_addresses.insert(address);
    }

    /// Fail the next `count` write attempts, then recover.
    pub fn fail_next_writes(&self, count: u32) {
        self.state().transient_write_failures = count;
    }

    /// Fail every read attempt from `address`.
    pub fn fail_reads_from(&self, address: u16) {
        self.state().failing_read_addresses.insert(address);
    }

    /// Simulate a missing bus adapter.
    pub fn detach(&self) {
        self.state().detached = true;
    }

    /// Remove every injected failure and reattach the adapter.
    pub fn heal(&self) {
        let mut state = self.state();
        state.fail_write_at = None;
        state.failing_write_addresses.clear();
        state.failing_read_addresses.clear();
        state.transient_write_failures = 0;
        state.detached = false;
    }

    /// All completed operations in order.
    pub fn ops(&self) -> Vec<BusOp> {
        self.state().ops.clone()
    }

    /// Completed writes as `(address, value)` pairs.
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.state()
            .ops
            .iter()
            .filter_map(|op| match *op {
                BusOp::Write { address, value } => Some((address, value)),
                BusOp::Read { .. } => None,
            })
            .collect()
    }

    /// Addresses of completed reads.
    pub fn reads(&self) -> Vec<u16> {
        self.state()
            .ops
            .iter()
            .filter_map(|op| match *op {
                BusOp::Read { address, .. } => Some(address),
                BusOp::Write { .. } => None,
            })
            .collect()
    }

    /// Write attempts including failed ones.
    pub fn write_attempts(&self) -> u32 {
        self.state().write_attempts
    }

    /// Read attempts including failed ones.
    pub fn read_attempts(&self) -> u32 {
        self.state().read_attempts
    }

    /// Forget recorded operations and attempt counters. Register contents stay.
    pub fn clear_ops(&self) {
        let mut state = self.state();
        state.ops.clear();
        state.write_attempts = 0;
        state.read_attempts = 0;
    }
}

impl TransferPort for MockBus {
    fn read_register(&mut self, address: u16) -> Result<u8, TransportError> {
        let mut state = self.state();
        if state.detached {
            return Err(TransportError::Unavailable);
        }
        state.read_attempts += 1;
        if state.failing_read_addresses.contains(&address) {
            return Err(TransportError::Incomplete(format!(
                "simulated read failure at 0x{address:04X}"
            )));
        }

        let value = state.registers.get(&address).copied().unwrap_or(0);
        state.ops.push(BusOp::Read { address, value });
        Ok(value)
    }

    fn write_register(&mut self, address: u16, value: u8) -> Result<(), TransportError> {
        let mut state = self.state();
        if state.detached {
            return Err(TransportError::Unavailable);
        }
        state.write_attempts += 1;

        if state.transient_write_failures > 0 {
            state.transient_write_failures -= 1;
            return Err(TransportError::Incomplete("simulated transient failure".into()));
        }
        if state.fail_write_at == Some(state.completed_writes())
            || state.failing_write_addresses.contains(&address)
        {
            return Err(TransportError::Incomplete(format!(
                "simulated write failure at 0x{address:04X}"
            )));
        }

        state.registers.insert(address, value);
        state.ops.push(BusOp::Write { address, value });
        Ok(())
    }
}

// =============================================================================
// MockPower - Power Rail Counter
// =============================================================================

/// Power control that only counts transitions.
#[derive(Debug, Clone, Default)]
pub struct MockPower {
    on_count: Arc<AtomicU32>,
    off_count: Arc<AtomicU32>,
}

impl MockPower {
    /// Rails off, no transitions recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `power_on` calls.
    pub fn on_count(&self) -> u32 {
        self.on_count.load(Ordering::SeqCst)
    }

    /// Number of `power_off` calls.
    pub fn off_count(&self) -> u32 {
        self.off_count.load(Ordering::SeqCst)
    }

    /// True when the rails have been switched on more often than off.
    pub fn is_powered(&self) -> bool {
        self.on_count() > self.off_count()
    }
}

impl PowerControl for MockPower {
    fn power_on(&self) {
        self.on_count.fetch_add(1, Ordering::SeqCst);
    }

    fn power_off(&self) {
        self.off_count.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// MockDelay - Recorded Sleeps
// =============================================================================

/// Delay that records each request and returns immediately.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    requests: Arc<Mutex<Vec<Duration>>>,
}

impl MockDelay {
    /// Delay with no recorded requests.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, duration: Duration) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
    }

    /// Every requested sleep in order.
    pub fn requests(&self) -> Vec<Duration> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sum of every requested sleep.
    pub fn total(&self) -> Duration {
        self.requests().into_iter().sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(Duration::from_millis(u64::from(ms)));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_bus_records_writes_and_reads() {
        let bus = MockBus::new().with_register(0x3580, 0x5A);
        let mut port = bus.clone();

        port.write_register(0x0100, 0x01).unwrap();
        assert_eq!(port.read_register(0x3580).unwrap(), 0x5A);
        assert_eq!(port.read_register(0x0100).unwrap(), 0x01);

        assert_eq!(
            bus.ops(),
            vec![
                BusOp::Write {
                    address: 0x0100,
                    value: 0x01
                },
                BusOp::Read {
                    address: 0x3580,
                    value: 0x5A
                },
                BusOp::Read {
                    address: 0x0100,
                    value: 0x01
                },
            ]
        );
    }

    #[test]
    fn test_mock_bus_fail_write_at_is_sticky() {
        let bus = MockBus::new();
        let mut port = bus.clone();
        bus.fail_write_at(1);

        port.write_register(0x0002, 0x00).unwrap();
        assert!(port.write_register(0x0003, 0x00).is_err());
        assert!(port.write_register(0x0003, 0x00).is_err());
        assert_eq!(bus.writes(), vec![(0x0002, 0x00)]);
        assert_eq!(bus.write_attempts(), 3);

        bus.heal();
        port.write_register(0x0003, 0x00).unwrap();
        assert_eq!(bus.writes().len(), 2);
    }

    #[test]
    fn test_mock_bus_transient_failures_recover() {
        let bus = MockBus::new();
        let mut port = bus.clone();
        bus.fail_next_writes(2);

        assert!(port.write_register(0x0205, 0x10).is_err());
        assert!(port.write_register(0x0205, 0x10).is_err());
        assert!(port.write_register(0x0205, 0x10).is_ok());
        assert_eq!(bus.register(0x0205), 0x10);
    }

    #[test]
    fn test_mock_bus_detached() {
        let bus = MockBus::new();
        let mut port = bus.clone();
        bus.detach();

        assert_eq!(
            port.write_register(0x0100, 0x01),
            Err(TransportError::Unavailable)
        );
        assert_eq!(port.read_register(0x0100), Err(TransportError::Unavailable));
        assert_eq!(bus.write_attempts(), 0);
    }

    #[test]
    fn test_mock_power_counts() {
        let power = MockPower::new();
        power.power_on();
        assert!(power.is_powered());
        power.power_off();
        assert!(!power.is_powered());
        assert_eq!((power.on_count(), power.off_count()), (1, 1));
    }

    #[test]
    fn test_mock_delay_records() {
        let delay = MockDelay::new();
        let mut handle = delay.clone();
        handle.delay_ms(3);
        handle.delay_us(500);
        assert_eq!(
            delay.requests(),
            vec![Duration::from_millis(3), Duration::from_micros(500)]
        );
        assert_eq!(delay.total(), Duration::from_micros(3500));
    }
}
