//! Bus transports for the MPU-6050
//!
//! Two transports implement the `device-driver` [`RegisterInterface`]:
//!
//! - [`I2cMaster`] drives a microcontroller I2C controller through the
//!   polling primitives of [`BusController`] and issues the two transaction
//!   shapes every register access is built from.
//! - [`I2cInterface`] carries the same transactions over any
//!   `embedded_hal::i2c::I2c` implementation.
//!
//! Both move exactly one data byte per bus transaction. A request for several
//! bytes becomes one transaction per byte at ascending register addresses.

use crate::I2C_ADDRESS_AD0_LOW;

use device_driver::RegisterInterface;

/// Direction bit sent with the slave address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Master transmits
    Write,
    /// Master receives
    Read,
}

/// Framing command issued to the bus controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// START, transmit the data register, keep the bus
    BurstSendStart,
    /// Transmit the data register, then STOP
    BurstSendFinish,
    /// START, receive one byte, NACK, STOP
    SingleReceive,
}

/// Blocking I2C bus controller peripheral
///
/// Mirrors the register-level interface of a microcontroller I2C master:
/// load the slave address, load or fetch the data register, kick off a
/// framing command and poll until the controller is idle again.
pub trait BusController {
    /// Load the slave address and direction for the next command
    fn set_slave_address(&mut self, address: u8, direction: Direction);

    /// Load the byte to transmit
    fn put_data(&mut self, byte: u8);

    /// Fetch the last received byte
    fn get_data(&mut self) -> u8;

    /// Start a framing command
    fn control(&mut self, command: Command);

    /// Whether the controller is still executing a command
    fn is_busy(&mut self) -> bool;
}

/// Errors of the bus-controller transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The controller stayed busy for the whole poll budget
    ///
    /// Only returned when a limit was set with [`I2cMaster::with_poll_limit`].
    Timeout,
}

/// Register transport over a polled I2C bus controller
///
/// By default a busy-wait never gives up: a device that holds the bus blocks
/// the caller. Call [`with_poll_limit`](Self::with_poll_limit) to bound it.
///
/// Slave NACKs are not reported; they show up in the `I2C_MST_STATUS` NACK
/// bits if the caller reads them.
pub struct I2cMaster<B> {
    bus: B,
    address: u8,
    poll_limit: Option<u32>,
}

impl<B> I2cMaster<B> {
    /// Create a transport for the default address (0x68, AD0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cMaster::default(controller);
    /// let mut imu = Mpu6050::new(interface);
    /// ```
    pub const fn default(bus: B) -> Self {
        Self::new(bus, I2C_ADDRESS_AD0_LOW)
    }

    /// Create a transport for the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(bus: B) -> Self {
        Self::new(bus, crate::I2C_ADDRESS_AD0_HIGH)
    }

    /// Create a transport for a custom 7-bit slave address
    pub const fn new(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            poll_limit: None,
        }
    }

    /// Give up with [`BusError::Timeout`] after `polls` busy polls per phase
    #[must_use]
    pub const fn with_poll_limit(mut self, polls: u32) -> Self {
        self.poll_limit = Some(polls);
        self
    }

    /// Slave address every transaction is sent to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the transport and return the bus controller
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: BusController> I2cMaster<B> {
    /// Read one register: address write phase, then a single-byte receive
    ///
    /// # Errors
    ///
    /// [`BusError::Timeout`] if a poll limit is set and exhausted.
    pub fn receive_byte(&mut self, register: u8) -> Result<u8, BusError> {
        self.bus.set_slave_address(self.address, Direction::Write);
        self.bus.put_data(register);
        self.bus.control(Command::BurstSendStart);
        self.wait_idle()?;

        self.bus.set_slave_address(self.address, Direction::Read);
        self.bus.control(Command::SingleReceive);
        self.wait_idle()?;

        Ok(self.bus.get_data())
    }

    /// Write one register: register address and data in a single burst
    ///
    /// # Errors
    ///
    /// [`BusError::Timeout`] if a poll limit is set and exhausted.
    pub fn write_byte(&mut self, register: u8, data: u8) -> Result<(), BusError> {
        self.bus.set_slave_address(self.address, Direction::Write);
        self.bus.put_data(register);
        self.bus.control(Command::BurstSendStart);
        self.wait_idle()?;

        self.bus.put_data(data);
        self.bus.control(Command::BurstSendFinish);
        self.wait_idle()
    }

    fn wait_idle(&mut self) -> Result<(), BusError> {
        let mut polls: u32 = 0;
        while self.bus.is_busy() {
            polls = polls.saturating_add(1);
            if self.poll_limit.is_some_and(|limit| polls >= limit) {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "I2C controller busy after {} polls (slave 0x{:02x})",
                    polls,
                    self.address
                );
                return Err(BusError::Timeout);
            }
        }
        Ok(())
    }
}

impl<B: BusController> RegisterInterface for I2cMaster<B> {
    type Error = BusError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // one transaction per byte
        for (register, byte) in (address..=u8::MAX).zip(read_data.iter_mut()) {
            *byte = self.receive_byte(register)?;
        }
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        for (register, &byte) in (address..=u8::MAX).zip(write_data) {
            self.write_byte(register, byte)?;
        }
        Ok(())
    }
}

/// Register transport over an `embedded-hal` I2C bus
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Mpu6050::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_AD0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// For standard configurations prefer [`default()`](Self::default)
    /// or [`alternative()`](Self::alternative).
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        for (register, byte) in (address..=u8::MAX).zip(read_data.iter_mut()) {
            self.i2c
                .write_read(self.address, &[register], core::slice::from_mut(byte))?;
        }
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        for (register, &byte) in (address..=u8::MAX).zip(write_data) {
            self.i2c.write(self.address, &[register, byte])?;
        }
        Ok(())
    }
}
