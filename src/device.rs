//! High-level driver API for the MPU-6050
//!
//! [`Mpu6050`] turns register views into bus traffic. Every access is one
//! single-byte transaction per register: views are read or written as a
//! whole, paired measurement registers are read high byte first, and banked
//! registers are walked in ascending address order.

use device_driver::RegisterInterface;

use crate::address::{EXT_SENS_DATA_COUNT, RegisterAddress};
use crate::codec::Register;
use crate::registers::{
    I2cSlv4Ctrl, I2cSlvAddr, I2cSlvCtrl, PwrMgmt1, SelfTestA, SelfTestX, SelfTestY, SelfTestZ,
    WhoAmI,
};
use crate::selectors::ClockSource;
use crate::{Bitfield, Error, WHO_AM_I_VALUE};

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Factory self-test values spread over `SELF_TEST_X/Y/Z/A`
///
/// The 5-bit accelerometer values are split: the upper three bits live in
/// `SELF_TEST_X/Y/Z[7:5]`, the lower two in `SELF_TEST_A`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTest {
    /// X accelerometer self-test value (5 bits)
    pub xa_test: u8,
    /// Y accelerometer self-test value (5 bits)
    pub ya_test: u8,
    /// Z accelerometer self-test value (5 bits)
    pub za_test: u8,
    /// X gyroscope self-test value (5 bits)
    pub xg_test: u8,
    /// Y gyroscope self-test value (5 bits)
    pub yg_test: u8,
    /// Z gyroscope self-test value (5 bits)
    pub zg_test: u8,
}

/// Auxiliary I2C slave channels 0-3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slave {
    /// Slave 0
    Slave0 = 0,
    /// Slave 1
    Slave1 = 1,
    /// Slave 2
    Slave2 = 2,
    /// Slave 3
    Slave3 = 3,
}

impl Slave {
    /// `ADDR`, `REG`, `CTRL` and `DO` registers of this channel
    const fn registers(self) -> [RegisterAddress; 4] {
        use RegisterAddress as R;
        match self {
            Self::Slave0 => [R::I2cSlv0Addr, R::I2cSlv0Reg, R::I2cSlv0Ctrl, R::I2cSlv0Do],
            Self::Slave1 => [R::I2cSlv1Addr, R::I2cSlv1Reg, R::I2cSlv1Ctrl, R::I2cSlv1Do],
            Self::Slave2 => [R::I2cSlv2Addr, R::I2cSlv2Reg, R::I2cSlv2Ctrl, R::I2cSlv2Do],
            Self::Slave3 => [R::I2cSlv3Addr, R::I2cSlv3Reg, R::I2cSlv3Ctrl, R::I2cSlv3Do],
        }
    }
}

impl TryFrom<u8> for Slave {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Slave0),
            1 => Ok(Self::Slave1),
            2 => Ok(Self::Slave2),
            3 => Ok(Self::Slave3),
            other => Err(other),
        }
    }
}

/// Configuration of one of the slave channels 0-3
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlaveChannel {
    /// `I2C_SLVx_ADDR`
    pub addr: I2cSlvAddr,
    /// `I2C_SLVx_REG`, first register of the external device to access
    pub reg: u8,
    /// `I2C_SLVx_CTRL`
    pub ctrl: I2cSlvCtrl,
}

/// Configuration and data registers of slave channel 4
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slave4Channel {
    /// `I2C_SLV4_ADDR`
    pub addr: I2cSlvAddr,
    /// `I2C_SLV4_REG`
    pub reg: u8,
    /// `I2C_SLV4_CTRL`
    pub ctrl: I2cSlv4Ctrl,
    /// `I2C_SLV4_DO`, byte written to the external device
    pub data_out: u8,
    /// `I2C_SLV4_DI`, byte read from the external device (read-only)
    pub data_in: u8,
}

/// Main driver for the MPU-6050
pub struct Mpu6050<I> {
    interface: I,
}

impl<I> Mpu6050<I> {
    /// Create a driver on top of a register transport
    ///
    /// No bus traffic happens here; call [`verify`](Self::verify) or
    /// [`init`](Self::init) to talk to the device.
    pub const fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Consume the driver and return the transport
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I> Mpu6050<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Initialize the device
    ///
    /// Sets `DEVICE_RESET`, polls `PWR_MGMT_1` in 1 ms steps until the reset
    /// bit clears (at most 100 ms), then wakes the device and selects the
    /// X gyroscope PLL as clock source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InitializationTimeout`] if the device never leaves
    /// reset, or a bus error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut imu = Mpu6050::new(I2cInterface::default(i2c));
    /// imu.verify()?;
    /// imu.init(&mut delay)?;
    /// ```
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        const MAX_WAIT_MS: u32 = 100;
        const POLL_INTERVAL_MS: u32 = 1;

        self.modify::<PwrMgmt1, _>(|w| w.device_reset = true)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("MPU-6050 reset requested");

        let mut reset_done = false;
        for _ in 0..(MAX_WAIT_MS / POLL_INTERVAL_MS) {
            delay.delay_ms(POLL_INTERVAL_MS);
            // the device may not answer while it is resetting
            if self
                .read::<PwrMgmt1>()
                .is_ok_and(|pwr_mgmt| !pwr_mgmt.device_reset)
            {
                reset_done = true;
                break;
            }
        }

        if !reset_done {
            #[cfg(feature = "defmt")]
            defmt::error!("MPU-6050 still in reset after {} ms", MAX_WAIT_MS);
            return Err(Error::InitializationTimeout);
        }

        self.modify::<PwrMgmt1, _>(|w| {
            w.sleep = false;
            *w = w.with_clock_source(ClockSource::PllXGyro);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("MPU-6050 awake, clock source PLL X gyro");

        Ok(())
    }

    /// Read a register view
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let status = imu.read::<IntStatus>()?;
    /// if status.data_rdy_int { /* ... */ }
    /// ```
    pub fn read<R: Register>(&mut self) -> Result<R, Error<I::Error>> {
        Ok(R::decode(self.read_byte(R::ADDRESS)?))
    }

    /// Write a register view
    ///
    /// Reserved bits are written as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write<R: Register>(&mut self, value: &R) -> Result<(), Error<I::Error>> {
        self.write_byte(R::ADDRESS, value.encode())
    }

    /// Read a register view, let `f` change it and write it back
    ///
    /// Returns the value that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn modify<R, F>(&mut self, f: F) -> Result<R, Error<I::Error>>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        let mut value = self.read::<R>()?;
        f(&mut value);
        self.write(&value)?;
        Ok(value)
    }

    /// Read the raw byte of any register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw(&mut self, register: RegisterAddress) -> Result<u8, Error<I::Error>> {
        self.read_byte(register.addr())
    }

    /// Write a raw byte to any register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_raw(
        &mut self,
        register: RegisterAddress,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write_byte(register.addr(), value)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.read::<WhoAmI>()?.who_am_i)
    }

    /// Check that the device answers with the MPU-6050 identity
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] with the value read if `WHO_AM_I` is
    /// not `0x68`, or a bus error.
    pub fn verify(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "WHO_AM_I mismatch: expected 0x{:02x}, got 0x{:02x}",
                WHO_AM_I_VALUE,
                who_am_i
            );
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Read the raw X-axis acceleration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_x(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::AccelXoutH)
    }

    /// Read the raw Y-axis acceleration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_y(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::AccelYoutH)
    }

    /// Read the raw Z-axis acceleration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_z(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::AccelZoutH)
    }

    /// Read all three accelerometer axes (X, Y, Z)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self) -> Result<AccelData, Error<I::Error>> {
        Ok(AccelData {
            x: self.read_accel_x()?,
            y: self.read_accel_y()?,
            z: self.read_accel_z()?,
        })
    }

    /// Read the raw X-axis rotation rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_x(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::GyroXoutH)
    }

    /// Read the raw Y-axis rotation rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_y(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::GyroYoutH)
    }

    /// Read the raw Z-axis rotation rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_z(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::GyroZoutH)
    }

    /// Read all three gyroscope axes (X, Y, Z)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        Ok(GyroData {
            x: self.read_gyro_x()?,
            y: self.read_gyro_y()?,
            z: self.read_gyro_z()?,
        })
    }

    /// Read the raw temperature
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        self.read_i16(RegisterAddress::TempOutH)
    }

    /// Read the number of bytes waiting in the FIFO
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_count(&mut self) -> Result<u16, Error<I::Error>> {
        self.read_u16(RegisterAddress::FifoCountH)
    }

    /// Pop one byte from the FIFO
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_byte(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_byte(RegisterAddress::FifoRW.addr())
    }

    /// Push one byte into the FIFO
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_fifo_byte(&mut self, value: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(RegisterAddress::FifoRW.addr(), value)
    }

    /// Drain up to `buffer.len()` bytes from the FIFO
    ///
    /// Reads `FIFO_COUNT` first and never pops more bytes than it reports.
    /// Returns the number of bytes stored in `buffer`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo(&mut self, buffer: &mut [u8]) -> Result<usize, Error<I::Error>> {
        let count = usize::from(self.read_fifo_count()?);
        let len = count.min(buffer.len());
        for byte in &mut buffer[..len] {
            *byte = self.read_fifo_byte()?;
        }
        Ok(len)
    }

    /// Read the factory self-test values
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_self_test(&mut self) -> Result<SelfTest, Error<I::Error>> {
        let x = self.read::<SelfTestX>()?;
        let y = self.read::<SelfTestY>()?;
        let z = self.read::<SelfTestZ>()?;
        let a = self.read::<SelfTestA>()?;

        Ok(SelfTest {
            xa_test: (x.xa_test_hi << 2) | a.xa_test_lo,
            ya_test: (y.ya_test_hi << 2) | a.ya_test_lo,
            za_test: (z.za_test_hi << 2) | a.za_test_lo,
            xg_test: x.xg_test,
            yg_test: y.yg_test,
            zg_test: z.zg_test,
        })
    }

    /// Write the self-test registers
    ///
    /// Values wider than five bits are truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_self_test(&mut self, value: &SelfTest) -> Result<(), Error<I::Error>> {
        let xa = value.xa_test & 0x1F;
        let ya = value.ya_test & 0x1F;
        let za = value.za_test & 0x1F;

        self.write(&SelfTestX {
            xa_test_hi: xa >> 2,
            xg_test: value.xg_test,
        })?;
        self.write(&SelfTestY {
            ya_test_hi: ya >> 2,
            yg_test: value.yg_test,
        })?;
        self.write(&SelfTestZ {
            za_test_hi: za >> 2,
            zg_test: value.zg_test,
        })?;
        self.write(&SelfTestA {
            xa_test_lo: xa & 0x03,
            ya_test_lo: ya & 0x03,
            za_test_lo: za & 0x03,
        })
    }

    /// Read `EXT_SENS_DATA_{index}`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] without touching the bus if `index` is
    /// greater than 23, or a bus error.
    pub fn read_ext_sens_data(&mut self, index: u8) -> Result<u8, Error<I::Error>> {
        let address = ext_sens_data_address(index)?;
        self.read_byte(address)
    }

    /// Write `EXT_SENS_DATA_{index}`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] without touching the bus if `index` is
    /// greater than 23, or a bus error.
    pub fn write_ext_sens_data(&mut self, index: u8, value: u8) -> Result<(), Error<I::Error>> {
        let address = ext_sens_data_address(index)?;
        self.write_byte(address, value)
    }

    /// Read the whole external sensor data bank, lowest address first
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_ext_sens_data_all(
        &mut self,
    ) -> Result<[u8; EXT_SENS_DATA_COUNT], Error<I::Error>> {
        let mut data = [0u8; EXT_SENS_DATA_COUNT];
        let base = RegisterAddress::ExtSensData00.addr();
        for (address, byte) in (base..).zip(data.iter_mut()) {
            *byte = self.read_byte(address)?;
        }
        Ok(data)
    }

    /// Write the whole external sensor data bank, lowest address first
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_ext_sens_data_all(
        &mut self,
        data: &[u8; EXT_SENS_DATA_COUNT],
    ) -> Result<(), Error<I::Error>> {
        let base = RegisterAddress::ExtSensData00.addr();
        for (address, &byte) in (base..).zip(data) {
            self.write_byte(address, byte)?;
        }
        Ok(())
    }

    /// Read the `ADDR`, `REG` and `CTRL` registers of a slave channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_slave(&mut self, slave: Slave) -> Result<SlaveChannel, Error<I::Error>> {
        let [addr, reg, ctrl, _] = slave.registers();
        Ok(SlaveChannel {
            addr: I2cSlvAddr::decode(self.read_byte(addr.addr())?),
            reg: self.read_byte(reg.addr())?,
            ctrl: I2cSlvCtrl::decode(self.read_byte(ctrl.addr())?),
        })
    }

    /// Write the `ADDR`, `REG` and `CTRL` registers of a slave channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_slave(
        &mut self,
        slave: Slave,
        channel: &SlaveChannel,
    ) -> Result<(), Error<I::Error>> {
        let [addr, reg, ctrl, _] = slave.registers();
        self.write_byte(addr.addr(), channel.addr.encode())?;
        self.write_byte(reg.addr(), channel.reg)?;
        self.write_byte(ctrl.addr(), channel.ctrl.encode())
    }

    /// Read `I2C_SLVx_DO`, the byte written to the external device
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_slave_data_out(&mut self, slave: Slave) -> Result<u8, Error<I::Error>> {
        let [.., data_out] = slave.registers();
        self.read_byte(data_out.addr())
    }

    /// Write `I2C_SLVx_DO`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_slave_data_out(
        &mut self,
        slave: Slave,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        let [.., data_out] = slave.registers();
        self.write_byte(data_out.addr(), value)
    }

    /// Read all slave 4 registers in address order: `ADDR`, `REG`, `DO`, `CTRL`, `DI`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_slave4(&mut self) -> Result<Slave4Channel, Error<I::Error>> {
        let addr = I2cSlvAddr::decode(self.read_byte(RegisterAddress::I2cSlv4Addr.addr())?);
        let reg = self.read_byte(RegisterAddress::I2cSlv4Reg.addr())?;
        let data_out = self.read_byte(RegisterAddress::I2cSlv4Do.addr())?;
        let ctrl = self.read::<I2cSlv4Ctrl>()?;
        let data_in = self.read_byte(RegisterAddress::I2cSlv4Di.addr())?;

        Ok(Slave4Channel {
            addr,
            reg,
            ctrl,
            data_out,
            data_in,
        })
    }

    /// Write the slave 4 configuration: `ADDR`, `REG`, `DO`, then `CTRL`
    ///
    /// `CTRL` goes last so the transfer is enabled only once the data byte is
    /// in place. `data_in` is read-only and not written.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_slave4(&mut self, channel: &Slave4Channel) -> Result<(), Error<I::Error>> {
        self.write_byte(RegisterAddress::I2cSlv4Addr.addr(), channel.addr.encode())?;
        self.write_byte(RegisterAddress::I2cSlv4Reg.addr(), channel.reg)?;
        self.write_byte(RegisterAddress::I2cSlv4Do.addr(), channel.data_out)?;
        self.write(&channel.ctrl)
    }

    fn read_byte(&mut self, address: u8) -> Result<u8, Error<I::Error>> {
        let mut data = [0u8; 1];
        self.interface.read_register(address, 8, &mut data)?;
        Ok(data[0])
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.interface.write_register(address, 8, &[value])?;
        Ok(())
    }

    /// High byte at `high`, then low byte at the next address
    fn read_pair(&mut self, high: RegisterAddress) -> Result<[u8; 2], Error<I::Error>> {
        let address = high.addr();
        let msb = self.read_byte(address)?;
        let lsb = self.read_byte(address + 1)?;
        Ok([msb, lsb])
    }

    fn read_u16(&mut self, high: RegisterAddress) -> Result<u16, Error<I::Error>> {
        Ok(u16::from_be_bytes(self.read_pair(high)?))
    }

    fn read_i16(&mut self, high: RegisterAddress) -> Result<i16, Error<I::Error>> {
        Ok(i16::from_be_bytes(self.read_pair(high)?))
    }
}

fn ext_sens_data_address<E>(index: u8) -> Result<u8, Error<E>> {
    RegisterAddress::ext_sens_data(index).ok_or_else(|| {
        #[cfg(feature = "defmt")]
        defmt::warn!("EXT_SENS_DATA index {} out of range", index);
        Error::InvalidIndex(index)
    })
}
