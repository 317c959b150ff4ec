//! Live exposure updates and the grouped parameter hold.
//!
//! These writes go straight to the running sensor, not through a table. When
//! two or more of {gain, coarse time, frame length} change together they are
//! bracketed by `GROUPED_PARAMETER_HOLD` so they land on the same frame.
//!
//! Any failed write aborts the sequence. If that happens after the hold was
//! enabled, the release write is never sent and the sensor stays held until
//! the next successful update or mode set.

use embedded_hal::delay::DelayNs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SensorResult;
use crate::hardware::TransferPort;
use crate::overrides::{coarse_time_regs, frame_length_regs, gain_reg};
use crate::registers::{
    RegisterEntry, GROUPED_PARAMETER_HOLD, GROUP_HOLD_DISABLE, GROUP_HOLD_ENABLE,
};
use crate::writer::RegisterWriter;

/// Exposure parameters to change together. `None` leaves a parameter alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureUpdate {
    /// Analogue gain code.
    #[serde(default)]
    pub gain: Option<u16>,
    /// Coarse integration time in lines.
    #[serde(default)]
    pub coarse_time: Option<u32>,
    /// Frame length in lines.
    #[serde(default)]
    pub frame_length: Option<u32>,
}

impl ExposureUpdate {
    /// Number of parameters this update changes.
    pub fn enabled_count(&self) -> usize {
        [
            self.gain.is_some(),
            self.coarse_time.is_some(),
            self.frame_length.is_some(),
        ]
        .into_iter()
        .filter(|enabled| *enabled)
        .count()
    }

    /// Whether the update needs the hold bracket.
    pub fn is_grouped(&self) -> bool {
        self.enabled_count() >= 2
    }
}

fn write_entries<P, D>(
    writer: &mut RegisterWriter<P, D>,
    entries: &[RegisterEntry],
) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
{
    for entry in entries {
        writer.write(entry.address, (entry.value & 0xFF) as u8)?;
    }
    Ok(())
}

fn with_hold<P, D, F>(writer: &mut RegisterWriter<P, D>, hold: bool, body: F) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
    F: FnOnce(&mut RegisterWriter<P, D>) -> SensorResult<()>,
{
    if hold {
        writer.write(GROUPED_PARAMETER_HOLD, GROUP_HOLD_ENABLE)?;
    }
    body(writer)?;
    if hold {
        writer.write(GROUPED_PARAMETER_HOLD, GROUP_HOLD_DISABLE)?;
    }
    Ok(())
}

/// Write the frame length, optionally inside a hold bracket.
pub fn set_frame_length<P, D>(
    writer: &mut RegisterWriter<P, D>,
    frame_length: u32,
    group_hold: bool,
) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
{
    with_hold(writer, group_hold, |w| {
        write_entries(w, &frame_length_regs(frame_length))
    })
}

/// Write the coarse integration time, optionally inside a hold bracket.
pub fn set_coarse_time<P, D>(
    writer: &mut RegisterWriter<P, D>,
    coarse_time: u32,
    group_hold: bool,
) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
{
    with_hold(writer, group_hold, |w| {
        write_entries(w, &coarse_time_regs(coarse_time))
    })
}

/// Write the analogue gain, optionally inside a hold bracket.
pub fn set_gain<P, D>(writer: &mut RegisterWriter<P, D>, gain: u16, group_hold: bool) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
{
    with_hold(writer, group_hold, |w| write_entries(w, &[gain_reg(gain)]))
}

/// Apply an exposure update: gain, then coarse time, then frame length.
pub fn apply_exposure_update<P, D>(
    writer: &mut RegisterWriter<P, D>,
    update: &ExposureUpdate,
) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
{
    let grouped = update.is_grouped();
    debug!(
        "exposure update {:?} ({})",
        update,
        if grouped { "grouped" } else { "direct" }
    );

    with_hold(writer, grouped, |w| {
        if let Some(gain) = update.gain {
            set_gain(w, gain, false)?;
        }
        if let Some(coarse_time) = update.coarse_time {
            set_coarse_time(w, coarse_time, false)?;
        }
        if let Some(frame_length) = update.frame_length {
            set_frame_length(w, frame_length, false)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorError;
    use crate::hardware::mock::{MockBus, MockDelay};

    fn setup() -> (MockBus, RegisterWriter<MockBus, MockDelay>) {
        let bus = MockBus::new();
        let writer = RegisterWriter::new(bus.clone(), MockDelay::new());
        (bus, writer)
    }

    #[test]
    fn test_enabled_count() {
        assert_eq!(ExposureUpdate::default().enabled_count(), 0);
        let update = ExposureUpdate {
            gain: Some(1),
            frame_length: Some(2),
            ..Default::default()
        };
        assert_eq!(update.enabled_count(), 2);
        assert!(update.is_grouped());
    }

    #[test]
    fn test_single_field_has_no_bracket() {
        let (bus, mut writer) = setup();
        let update = ExposureUpdate {
            coarse_time: Some(0x0456),
            ..Default::default()
        };
        apply_exposure_update(&mut writer, &update).unwrap();

        assert_eq!(bus.writes(), vec![(0x0202, 0x04), (0x0203, 0x56)]);
    }

    #[test]
    fn test_grouped_update_order() {
        let (bus, mut writer) = setup();
        let update = ExposureUpdate {
            gain: Some(0x80),
            coarse_time: Some(0x0100),
            frame_length: Some(0x0C4A),
        };
        apply_exposure_update(&mut writer, &update).unwrap();

        assert_eq!(
            bus.writes(),
            vec![
                (0x0104, 0x01),
                (0x0205, 0x80),
                (0x0202, 0x01),
                (0x0203, 0x00),
                (0x0340, 0x0C),
                (0x0341, 0x4A),
                (0x0104, 0x00),
            ]
        );
    }

    #[test]
    fn test_empty_update_writes_nothing() {
        let (bus, mut writer) = setup();
        apply_exposure_update(&mut writer, &ExposureUpdate::default()).unwrap();
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_hold_enable_failure_stops_everything() {
        let (bus, mut writer) = setup();
        bus.fail_writes_to(GROUPED_PARAMETER_HOLD);
        let update = ExposureUpdate {
            gain: Some(0x10),
            frame_length: Some(0x0400),
            ..Default::default()
        };

        let err = apply_exposure_update(&mut writer, &update).unwrap_err();

        assert!(matches!(err, SensorError::TransferFailed { address: 0x0104, .. }));
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_mid_sequence_failure_leaves_hold_enabled() {
        let (bus, mut writer) = setup();
        bus.fail_writes_to(0x0203);
        let update = ExposureUpdate {
            gain: Some(0x10),
            coarse_time: Some(0x0200),
            ..Default::default()
        };

        assert!(apply_exposure_update(&mut writer, &update).is_err());
        assert_eq!(bus.writes(), vec![(0x0104, 0x01), (0x0205, 0x10), (0x0202, 0x02)]);
        assert_eq!(bus.register(GROUPED_PARAMETER_HOLD), GROUP_HOLD_ENABLE);
    }

    #[test]
    fn test_standalone_setters_with_hold() {
        let (bus, mut writer) = setup();
        set_gain(&mut writer, 0x1E0, true).unwrap();
        assert_eq!(bus.writes(), vec![(0x0104, 0x01), (0x0205, 0xE0), (0x0104, 0x00)]);

        bus.clear_ops();
        set_frame_length(&mut writer, 0x0658, false).unwrap();
        assert_eq!(bus.writes(), vec![(0x0340, 0x06), (0x0341, 0x58)]);
    }

    #[test]
    fn test_update_from_json() {
        let update: ExposureUpdate = serde_json::from_str(r#"{"gain": 32, "frame_length": 1624}"#).unwrap();
        assert_eq!(update.gain, Some(32));
        assert_eq!(update.coarse_time, None);
        assert_eq!(update.frame_length, Some(1624));
    }
}
