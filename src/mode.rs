//! Supported readout modes and resolution lookup.
//!
//! Resolution lookup is an exact match against a fixed list. Adding a mode
//! means adding both a table in `tables` and a row here.

use serde::Serialize;
use std::fmt;

use crate::error::{SensorError, SensorResult};
use crate::registers::RegisterEntry;
use crate::tables;

/// A readout mode backed by one static register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SensorMode {
    /// Full resolution.
    Mode4208x3120,
    /// Half resolution.
    Mode2104x1560,
    /// 524x390 table, requested as 524x374.
    Mode524x390,
    /// 348x260 readout.
    Mode348x260,
    /// 1948x1096 readout.
    Mode1948x1096,
    /// 1308x736 readout.
    Mode1308x736,
}

/// Requested resolution and the mode it selects.
///
/// `524x374` selects the table named 524x390; the request key is 374, not 390.
const RESOLUTIONS: [((u32, u32), SensorMode); 6] = [
    ((4208, 3120), SensorMode::Mode4208x3120),
    ((2104, 1560), SensorMode::Mode2104x1560),
    ((524, 374), SensorMode::Mode524x390),
    ((348, 260), SensorMode::Mode348x260),
    ((1948, 1096), SensorMode::Mode1948x1096),
    ((1308, 736), SensorMode::Mode1308x736),
];

impl SensorMode {
    /// Every mode, in table index order.
    pub const ALL: [SensorMode; 6] = [
        SensorMode::Mode4208x3120,
        SensorMode::Mode2104x1560,
        SensorMode::Mode524x390,
        SensorMode::Mode348x260,
        SensorMode::Mode1948x1096,
        SensorMode::Mode1308x736,
    ];

    /// Position of this mode's table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mode at table position `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The register script for this mode.
    pub fn table(self) -> &'static [RegisterEntry] {
        match self {
            SensorMode::Mode4208x3120 => tables::MODE_4208X3120,
            SensorMode::Mode2104x1560 => tables::MODE_2104X1560,
            SensorMode::Mode524x390 => tables::MODE_524X390,
            SensorMode::Mode348x260 => tables::MODE_348X260,
            SensorMode::Mode1948x1096 => tables::MODE_1948X1096,
            SensorMode::Mode1308x736 => tables::MODE_1308X736,
        }
    }

    /// The (width, height) a caller passes to select this mode.
    pub fn request_resolution(self) -> (u32, u32) {
        RESOLUTIONS
            .iter()
            .find(|(_, mode)| *mode == self)
            .map(|(res, _)| *res)
            .unwrap_or((0, 0))
    }
}

impl fmt::Display for SensorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorMode::Mode4208x3120 => "4208x3120",
            SensorMode::Mode2104x1560 => "2104x1560",
            SensorMode::Mode524x390 => "524x390",
            SensorMode::Mode348x260 => "348x260",
            SensorMode::Mode1948x1096 => "1948x1096",
            SensorMode::Mode1308x736 => "1308x736",
        };
        f.write_str(name)
    }
}

/// Map a requested resolution to its mode.
///
/// # Errors
///
/// `SensorError::InvalidResolution` when no mode matches exactly.
pub fn resolve(width: u32, height: u32) -> SensorResult<SensorMode> {
    RESOLUTIONS
        .iter()
        .find(|(res, _)| *res == (width, height))
        .map(|(_, mode)| *mode)
        .ok_or(SensorError::InvalidResolution { width, height })
}
