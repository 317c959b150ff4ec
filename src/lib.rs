//! Core library for the imx091-ctl sensor control plane.
//!
//! Turns capture requests (resolution, frame length, coarse integration time,
//! gain) into ordered single-byte register writes on the sensor's control bus.
//! Mode changes run a static per-resolution register table with exposure
//! overrides merged in; runtime exposure changes go straight to live registers,
//! grouped under the sensor's parameter hold when several change at once.
//!
//! Data flow for a mode change:
//! `mode::resolve` → `overrides::OverrideList` → `engine::apply` →
//! `writer::RegisterWriter` → `hardware::TransferPort`.

pub mod config;
pub mod engine;
pub mod error;
pub mod error_recovery;
pub mod group_hold;
pub mod hardware;
pub mod mode;
pub mod overrides;
pub mod registers;
pub mod session;
pub mod tables;
pub mod writer;

pub use error::{SensorError, SensorResult};
pub use group_hold::ExposureUpdate;
pub use mode::SensorMode;
pub use session::{ModeRequest, SensorSession};
