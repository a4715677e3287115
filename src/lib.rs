#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod address;
pub mod codec;
pub mod device;
pub mod interface;
pub mod registers;
pub mod selectors;

// Re-export main types
pub use address::{EXT_SENS_DATA_COUNT, RegisterAddress};
pub use codec::{Bitfield, Field, FieldValue, Register};
pub use device::{AccelData, GyroData, Mpu6050, SelfTest, Slave, Slave4Channel, SlaveChannel};
pub use interface::{BusController, BusError, Command, Direction, I2cInterface, I2cMaster};
pub use selectors::{
    AccelFullScale, ClockSource, DlpfConfig, ExtSync, GyroFullScale, MasterClock, WakeFrequency,
};

/// MPU-6050 I2C address when AD0 pin is low (default: 0x68)
///
/// Use [`I2cInterface::default()`] or [`I2cMaster::default()`] for this
/// configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high (alternative: 0x69)
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of `WHO_AM_I` register
///
/// The register holds the upper six bits of the 7-bit address with AD0
/// ignored, so both address variants report `0x68`.
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Index outside a register bank (contains the rejected index).
    /// Raised before any bus access.
    InvalidIndex(u8),
    /// Initialization timed out (device did not leave reset)
    InitializationTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
