//! Sensor session: admission gate, mode state and cached identity.
//!
//! A `SensorSession` owns the register writer for one sensor and exposes every
//! device operation. Only one caller may hold the session at a time; the gate
//! is an atomic flag flipped by `acquire`/`release`, and acquisition powers
//! the sensor up through the injected `PowerControl`. Device operations on a
//! session that is not held fail with `NotAcquired` before touching the bus.
//!
//! # Mode state
//!
//! The session starts with no mode. `set_mode` records the new mode only when
//! the whole table was written. After a failure the recorded mode is the
//! previous one, while the sensor itself may hold a partial configuration.
//!
//! # Example
//!
//! ```rust
//! use imx091_ctl::hardware::mock::{MockBus, MockDelay, MockPower};
//! use imx091_ctl::session::{ModeRequest, SensorSession};
//!
//! let bus = MockBus::new();
//! let mut session = SensorSession::new(bus.clone(), MockDelay::new())
//!     .with_power(Box::new(MockPower::new()));
//!
//! session.acquire()?;
//! session.set_mode(&ModeRequest {
//!     width: 2104,
//!     height: 1560,
//!     frame_length: 0x0658,
//!     coarse_time: 0x0600,
//!     gain: 0x40,
//! })?;
//! session.release();
//! # Ok::<(), imx091_ctl::error::SensorError>(())
//! ```

use embedded_hal::delay::DelayNs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

use crate::engine;
use crate::error::{SensorError, SensorResult};
use crate::group_hold::{self, ExposureUpdate};
use crate::hardware::{PowerControl, TransferPort};
use crate::mode::{self, SensorMode};
use crate::overrides::OverrideList;
use crate::registers::{FUSE_ID_BASE, FUSE_ID_READ_ENABLE, FUSE_ID_READ_ENABLE_VALUE, FUSE_ID_SIZE};
use crate::writer::RegisterWriter;

/// A full mode change: resolution plus the exposure to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRequest {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frame length in lines.
    pub frame_length: u32,
    /// Coarse integration time in lines.
    pub coarse_time: u32,
    /// Analogue gain code.
    pub gain: u16,
}

/// Device status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorStatus {
    /// No fault known.
    Nominal,
}

impl SensorStatus {
    /// Wire encoding of the status.
    pub fn as_byte(self) -> u8 {
        match self {
            SensorStatus::Nominal => 0,
        }
    }
}

/// Fuse ID burned into the sensor's OTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorIdentity {
    fuse_id: [u8; FUSE_ID_SIZE],
}

impl SensorIdentity {
    /// Raw fuse ID bytes in register order.
    pub fn fuse_id(&self) -> &[u8; FUSE_ID_SIZE] {
        &self.fuse_id
    }
}

impl fmt::Display for SensorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.fuse_id {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// One sensor, its bus and its current state.
pub struct SensorSession<P, D> {
    writer: RegisterWriter<P, D>,
    power: Option<Box<dyn PowerControl>>,
    in_use: AtomicBool,
    mode: Option<SensorMode>,
    identity: Option<SensorIdentity>,
}

impl<P: TransferPort, D: DelayNs> SensorSession<P, D> {
    /// Session with the default retry policy and no power control.
    pub fn new(port: P, delay: D) -> Self {
        Self::from_writer(RegisterWriter::new(port, delay))
    }

    /// Session around an already configured writer.
    pub fn from_writer(writer: RegisterWriter<P, D>) -> Self {
        Self {
            writer,
            power: None,
            in_use: AtomicBool::new(false),
            mode: None,
            identity: None,
        }
    }

    /// Attach the board's power sequencing.
    pub fn with_power(mut self, power: Box<dyn PowerControl>) -> Self {
        self.power = Some(power);
        self
    }

    /// Take the admission gate and power the sensor on.
    ///
    /// # Errors
    ///
    /// - `AlreadyInUse` if another caller holds the session
    /// - `MissingCapability` if no power control is configured; the gate is
    ///   left free in that case
    pub fn acquire(&self) -> SensorResult<()> {
        if self.in_use.swap(true, Ordering::AcqRel) {
            info!("sensor busy");
            return Err(SensorError::AlreadyInUse);
        }

        match &self.power {
            Some(power) => {
                power.power_on();
                Ok(())
            }
            None => {
                error!("no power_on capability configured");
                self.in_use.store(false, Ordering::Release);
                Err(SensorError::MissingCapability("power_on"))
            }
        }
    }

    /// Power the sensor off and free the admission gate.
    pub fn release(&self) {
        if let Some(power) = &self.power {
            power.power_off();
        }
        if !self.in_use.swap(false, Ordering::AcqRel) {
            warn!("release of a sensor session that was not acquired");
        }
    }

    /// Whether a caller currently holds the session.
    pub fn is_in_use(&self) -> bool {
        self.in_use.load(Ordering::Acquire)
    }

    fn ensure_acquired(&self) -> SensorResult<()> {
        if self.is_in_use() {
            Ok(())
        } else {
            warn!("device operation on a session that was not acquired");
            Err(SensorError::NotAcquired)
        }
    }

    /// Mode written by the last successful `set_mode`.
    pub fn mode(&self) -> Option<SensorMode> {
        self.mode
    }

    /// Resolve the resolution, merge exposure overrides into its table and
    /// write it.
    pub fn set_mode(&mut self, request: &ModeRequest) -> SensorResult<SensorMode> {
        self.ensure_acquired()?;
        debug!(
            "set mode: {}x{} frame_length {} coarse_time {} gain {}",
            request.width, request.height, request.frame_length, request.coarse_time, request.gain
        );

        let mode = mode::resolve(request.width, request.height).map_err(|err| {
            error!("invalid resolution supplied to set mode: {}", err);
            err
        })?;
        let overrides =
            OverrideList::for_exposure(request.frame_length, request.coarse_time, request.gain);

        engine::apply(&mut self.writer, mode.table(), Some(&overrides))?;

        self.mode = Some(mode);
        info!("mode {} applied, stream on", mode);
        Ok(mode)
    }

    /// Write the frame length, optionally under the group hold.
    pub fn set_frame_length(&mut self, frame_length: u32, group_hold: bool) -> SensorResult<()> {
        self.ensure_acquired()?;
        group_hold::set_frame_length(&mut self.writer, frame_length, group_hold)
    }

    /// Write the coarse integration time, optionally under the group hold.
    pub fn set_coarse_time(&mut self, coarse_time: u32, group_hold: bool) -> SensorResult<()> {
        self.ensure_acquired()?;
        group_hold::set_coarse_time(&mut self.writer, coarse_time, group_hold)
    }

    /// Write the analogue gain, optionally under the group hold.
    pub fn set_gain(&mut self, gain: u16, group_hold: bool) -> SensorResult<()> {
        self.ensure_acquired()?;
        group_hold::set_gain(&mut self.writer, gain, group_hold)
    }

    /// Apply several exposure parameters, grouped when more than one changes.
    pub fn set_group_hold(&mut self, update: &ExposureUpdate) -> SensorResult<()> {
        self.ensure_acquired()?;
        group_hold::apply_exposure_update(&mut self.writer, update)
    }

    /// Device status. Always nominal; no status registers are polled.
    pub fn status(&self) -> SensorStatus {
        SensorStatus::Nominal
    }

    /// Fuse ID, read from the sensor on first call and cached afterwards.
    ///
    /// Nothing is cached if any transfer fails.
    pub fn sensor_identity(&mut self) -> SensorResult<SensorIdentity> {
        self.ensure_acquired()?;
        if let Some(identity) = self.identity {
            return Ok(identity);
        }

        self.writer
            .write(FUSE_ID_READ_ENABLE, FUSE_ID_READ_ENABLE_VALUE)?;
        let mut fuse_id = [0u8; FUSE_ID_SIZE];
        for (offset, byte) in (0u16..).zip(fuse_id.iter_mut()) {
            *byte = self.writer.read(FUSE_ID_BASE + offset)?;
        }

        let identity = SensorIdentity { fuse_id };
        info!("fuse id {}", identity);
        self.identity = Some(identity);
        Ok(identity)
    }
}
