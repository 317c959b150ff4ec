//! IMX091 register map and the table entry encoding.
//!
//! Tables keep the historical two-field `{address, value}` encoding, where two
//! address values are reserved as sentinels. `RegisterEntry::op` turns an entry
//! into a tagged `TableOp` so the interpreter never compares raw addresses.

use serde::Serialize;

/// Sentinel address: sleep for `value` milliseconds instead of writing.
pub const TABLE_WAIT_MS: u16 = 0x0000;
/// Sentinel address: end of table.
pub const TABLE_END: u16 = 0x0001;

/// Settle time used around standby and streaming transitions in the mode tables.
pub const STANDBY_SETTLE_MS: u16 = 3;

/// Default 7-bit I2C slave address of the sensor.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x10;

/// Streaming control (0 = standby, 1 = streaming).
pub const MODE_SELECT: u16 = 0x0100;

/// Grouped parameter hold. Writes made while this is 1 land together at the
/// next frame boundary once it returns to 0.
pub const GROUPED_PARAMETER_HOLD: u16 = 0x0104;
/// Value enabling the hold.
pub const GROUP_HOLD_ENABLE: u8 = 0x01;
/// Value releasing the hold.
pub const GROUP_HOLD_DISABLE: u8 = 0x00;

/// Coarse integration time, high byte.
pub const COARSE_INTEGRATION_TIME_HI: u16 = 0x0202;
/// Coarse integration time, low byte.
pub const COARSE_INTEGRATION_TIME_LO: u16 = 0x0203;

/// Analogue gain code.
pub const ANALOGUE_GAIN: u16 = 0x0205;

/// Frame length in lines, high byte.
pub const FRAME_LENGTH_LINES_HI: u16 = 0x0340;
/// Frame length in lines, low byte.
pub const FRAME_LENGTH_LINES_LO: u16 = 0x0341;

/// Enables readout of the fuse ID OTP block.
pub const FUSE_ID_READ_ENABLE: u16 = 0x34C9;
/// Value written to `FUSE_ID_READ_ENABLE` before reading.
pub const FUSE_ID_READ_ENABLE_VALUE: u8 = 0x10;
/// First fuse ID byte; the rest follow at consecutive addresses.
pub const FUSE_ID_BASE: u16 = 0x3580;
/// Fuse ID length in bytes.
pub const FUSE_ID_SIZE: usize = 8;

/// One entry of a register table or override list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegisterEntry {
    /// Register address, or a sentinel.
    pub address: u16,
    /// Value to write, or the sentinel's argument.
    pub value: u16,
}

/// Decoded meaning of a `RegisterEntry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOp {
    /// Sleep for the given number of milliseconds.
    Wait(u16),
    /// Write `value` to register `address`.
    Write {
        /// Register address.
        address: u16,
        /// Value; only the low byte reaches the wire.
        value: u16,
    },
    /// Stop interpreting the table.
    End,
}

impl RegisterEntry {
    /// Table terminator.
    pub const END: RegisterEntry = RegisterEntry {
        address: TABLE_END,
        value: 0x00,
    };

    /// A register write entry.
    pub const fn write(address: u16, value: u16) -> Self {
        Self { address, value }
    }

    /// A delay entry.
    pub const fn wait(ms: u16) -> Self {
        Self {
            address: TABLE_WAIT_MS,
            value: ms,
        }
    }

    /// Decode into the tagged form.
    pub fn op(&self) -> TableOp {
        match self.address {
            TABLE_WAIT_MS => TableOp::Wait(self.value),
            TABLE_END => TableOp::End,
            address => TableOp::Write {
                address,
                value: self.value,
            },
        }
    }

    /// True for `WAIT` and `END` entries.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self.op(), TableOp::Write { .. })
    }
}

impl From<TableOp> for RegisterEntry {
    fn from(op: TableOp) -> Self {
        match op {
            TableOp::Wait(ms) => RegisterEntry::wait(ms),
            TableOp::Write { address, value } => RegisterEntry::write(address, value),
            TableOp::End => RegisterEntry::END,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_decode() {
        assert_eq!(RegisterEntry::wait(3).op(), TableOp::Wait(3));
        assert_eq!(RegisterEntry::END.op(), TableOp::End);
        assert_eq!(
            RegisterEntry::write(0x0100, 0x01).op(),
            TableOp::Write {
                address: 0x0100,
                value: 0x01
            }
        );
    }

    #[test]
    fn test_sentinel_flag() {
        assert!(RegisterEntry::wait(0).is_sentinel());
        assert!(RegisterEntry::END.is_sentinel());
        assert!(!RegisterEntry::write(GROUPED_PARAMETER_HOLD, 1).is_sentinel());
    }

    #[test]
    fn test_tagged_form_maps_back_to_storage() {
        let op = TableOp::Write {
            address: FRAME_LENGTH_LINES_HI,
            value: 0x0C,
        };
        assert_eq!(RegisterEntry::from(op), RegisterEntry::write(0x0340, 0x0C));
        assert_eq!(RegisterEntry::from(TableOp::End), RegisterEntry::END);
    }
}
