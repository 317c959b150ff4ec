//! Exposure parameters as register entries.
//!
//! Pure conversions from semantic values (frame length, coarse integration time,
//! gain) to the registers that hold them, plus `OverrideList`, the small set of
//! entries that replace table defaults during a mode set.

use crate::registers::{
    RegisterEntry, ANALOGUE_GAIN, COARSE_INTEGRATION_TIME_HI, COARSE_INTEGRATION_TIME_LO,
    FRAME_LENGTH_LINES_HI, FRAME_LENGTH_LINES_LO,
};

/// Frame length as `[high, low]` byte entries.
pub fn frame_length_regs(frame_length: u32) -> [RegisterEntry; 2] {
    split_word(FRAME_LENGTH_LINES_HI, FRAME_LENGTH_LINES_LO, frame_length)
}

/// Coarse integration time as `[high, low]` byte entries.
pub fn coarse_time_regs(coarse_time: u32) -> [RegisterEntry; 2] {
    split_word(COARSE_INTEGRATION_TIME_HI, COARSE_INTEGRATION_TIME_LO, coarse_time)
}

/// Gain entry. The register is one byte wide; only the low 8 bits reach the wire.
pub fn gain_reg(gain: u16) -> RegisterEntry {
    RegisterEntry::write(ANALOGUE_GAIN, gain)
}

fn split_word(hi: u16, lo: u16, value: u32) -> [RegisterEntry; 2] {
    [
        RegisterEntry::write(hi, ((value >> 8) & 0xFF) as u16),
        RegisterEntry::write(lo, (value & 0xFF) as u16),
    ]
}

/// Register values that replace a table's static values when it is written.
///
/// Addresses are unique; pushing an address that is already present replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideList {
    entries: Vec<RegisterEntry>,
}

impl OverrideList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five entries injected at mode set: frame length (2), coarse time (2), gain (1).
    pub fn for_exposure(frame_length: u32, coarse_time: u32, gain: u16) -> Self {
        let mut list = Self::new();
        list.extend(frame_length_regs(frame_length));
        list.extend(coarse_time_regs(coarse_time));
        list.push(gain_reg(gain));
        list
    }

    /// Add an entry, replacing the value of an existing address.
    pub fn push(&mut self, entry: RegisterEntry) {
        match self.entries.iter_mut().find(|e| e.address == entry.address) {
            Some(existing) => existing.value = entry.value,
            None => self.entries.push(entry),
        }
    }

    /// Override value for `address`, if any.
    pub fn lookup(&self, address: u16) -> Option<u16> {
        self.entries
            .iter()
            .find(|e| e.address == address)
            .map(|e| e.value)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[RegisterEntry] {
        &self.entries
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no override is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<RegisterEntry> for OverrideList {
    fn extend<T: IntoIterator<Item = RegisterEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl FromIterator<RegisterEntry> for OverrideList {
    fn from_iter<T: IntoIterator<Item = RegisterEntry>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
