//! Bus transport for the SSD1306
//!
//! The controller tells command bytes from display RAM data by a control
//! byte at the start of every I2C write:
//!
//! - `0x00` - the following byte is a command
//! - `0x40` - the following bytes are written to display RAM

use embedded_hal::i2c::{I2c, Operation};

/// Default SSD1306 I2C address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternative SSD1306 I2C address (SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Control byte prefixing a single command byte
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefixing display RAM data
pub const CONTROL_DATA: u8 = 0x40;

/// Byte transport to the display controller
///
/// Both operations block until the bus transfer has completed or failed.
/// Errors are returned as-is; retrying is up to the bus layer.
pub trait Transport {
    /// Error type of the underlying bus
    type Error;

    /// Send one command byte
    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Send a block of display RAM data
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// I2C transport at a fixed 7-bit device address
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C> {
    /// Create a transport at the default address (0x3C)
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a transport at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address used for every transfer
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes share one START/STOP, so the control byte and the
        // payload reach the controller as a single data transfer.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}

#[cfg(test)]
impl<I2C> I2cTransport<I2C> {
    pub(crate) fn bus(&self) -> &I2C {
        &self.i2c
    }

    pub(crate) fn bus_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording I2C bus for driver tests

    extern crate std;

    use embedded_hal::i2c::{self, ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
    use std::vec::Vec;

    /// Error returned when the mock is told to NACK
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Nack;

    impl i2c::Error for Nack {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    /// One START..STOP transaction as seen on the wire
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Transfer {
        pub address: u8,
        pub bytes: Vec<u8>,
    }

    /// I2C bus that records every transaction
    #[derive(Default)]
    pub struct MockI2c {
        pub transfers: Vec<Transfer>,
        /// When set, every transaction fails with [`Nack`]
        pub nack: bool,
    }

    impl MockI2c {
        pub fn new() -> Self {
            Self::default()
        }

        /// Command bytes sent so far (payload of `[0x00, cmd]` transfers)
        pub fn commands(&self) -> Vec<u8> {
            self.transfers
                .iter()
                .filter(|t| t.bytes.len() == 2 && t.bytes[0] == super::CONTROL_COMMAND)
                .map(|t| t.bytes[1])
                .collect()
        }

        /// Data transfers (bytes after the `0x40` control byte)
        pub fn data_transfers(&self) -> Vec<&[u8]> {
            self.transfers
                .iter()
                .filter(|t| t.bytes.first() == Some(&super::CONTROL_DATA))
                .map(|t| &t.bytes[1..])
                .collect()
        }
    }

    impl ErrorType for MockI2c {
        type Error = Nack;
    }

    impl i2c::I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(Nack);
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transfers.push(Transfer { address, bytes });
            Ok(())
        }
    }
}
