//! Register table interpreter.
//!
//! Walks a table in order. `WAIT` entries sleep, `END` stops, every other entry
//! becomes one register write whose value may be replaced through an override
//! lookup. The first failed write aborts the run; nothing already written is
//! rolled back.

use embedded_hal::delay::DelayNs;
use tracing::{debug, error};

use crate::error::SensorResult;
use crate::hardware::TransferPort;
use crate::overrides::OverrideList;
use crate::registers::{RegisterEntry, TableOp};
use crate::writer::RegisterWriter;

/// Write `table`, taking values from `overrides` where they name the same address.
pub fn apply<P, D>(
    writer: &mut RegisterWriter<P, D>,
    table: &[RegisterEntry],
    overrides: Option<&OverrideList>,
) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
{
    apply_with(writer, table, |address| {
        overrides.and_then(|list| list.lookup(address))
    })
}

/// Write `table`, asking `lookup` for a replacement value at each address.
pub fn apply_with<P, D, F>(
    writer: &mut RegisterWriter<P, D>,
    table: &[RegisterEntry],
    lookup: F,
) -> SensorResult<()>
where
    P: TransferPort,
    D: DelayNs,
    F: Fn(u16) -> Option<u16>,
{
    let mut writes = 0usize;
    for entry in table {
        match entry.op() {
            TableOp::Wait(ms) => writer.settle(ms),
            TableOp::End => break,
            TableOp::Write { address, value } => {
                let value = lookup(address).unwrap_or(value);
                if let Err(err) = writer.write(address, (value & 0xFF) as u8) {
                    error!("table write aborted after {} writes: {}", writes, err);
                    return Err(err);
                }
                writes += 1;
            }
        }
    }
    debug!("table applied: {} writes", writes);
    Ok(())
}
