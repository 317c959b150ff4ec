//! `TransferPort` over an `embedded-hal` I2C bus.
//!
//! Register addresses go out high byte first. A write is one 3-byte message,
//! a read is one write-read transaction (two address bytes out, one data byte
//! in), so every `TransferPort` call is exactly one bus transaction.

use embedded_hal::i2c::{Error as _, I2c, SevenBitAddress};

use super::{TransferPort, TransportError};

/// Sensor control port on a 7-bit-addressed I2C bus.
pub struct I2cTransport<I2C> {
    bus: Option<I2C>,
    address: SevenBitAddress,
}

impl<I2C: I2c> I2cTransport<I2C> {
    /// Attach to `bus`, talking to the sensor at `address`.
    pub fn new(bus: I2C, address: SevenBitAddress) -> Self {
        Self {
            bus: Some(bus),
            address,
        }
    }

    /// A port with no adapter behind it. Every transaction reports
    /// `TransportError::Unavailable`.
    pub fn detached(address: SevenBitAddress) -> Self {
        Self { bus: None, address }
    }

    /// The sensor's bus address.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give the bus back to the caller.
    pub fn release(self) -> Option<I2C> {
        self.bus
    }

    fn bus(&mut self) -> Result<&mut I2C, TransportError> {
        self.bus.as_mut().ok_or(TransportError::Unavailable)
    }
}

impl<I2C: I2c> TransferPort for I2cTransport<I2C> {
    fn read_register(&mut self, address: u16) -> Result<u8, TransportError> {
        let slave = self.address;
        let mut data = [0u8; 1];
        self.bus()?
            .write_read(slave, &address.to_be_bytes(), &mut data)
            .map_err(|e| TransportError::Incomplete(format!("{:?}", e.kind())))?;
        Ok(data[0])
    }

    fn write_register(&mut self, address: u16, value: u8) -> Result<(), TransportError> {
        let slave = self.address;
        let [hi, lo] = address.to_be_bytes();
        self.bus()?
            .write(slave, &[hi, lo, value])
            .map_err(|e| TransportError::Incomplete(format!("{:?}", e.kind())))
    }
}
