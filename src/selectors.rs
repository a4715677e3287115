//! Typed values for multi-bit selector fields
//!
//! The register views keep selectors as raw `u8` so that every byte decodes.
//! These enums name the valid settings and convert in both directions; the
//! `TryFrom<u8>` error carries the rejected raw value.
//!
//! # Example
//!
//! ```ignore
//! # use mpu6050_regs::{Mpu6050, AccelFullScale, ClockSource, registers::{AccelConfig, PwrMgmt1}};
//! # let mut imu: Mpu6050<_> = todo!();
//! imu.modify::<AccelConfig, _>(|w| *w = w.with_full_scale(AccelFullScale::G8))?;
//! imu.modify::<PwrMgmt1, _>(|w| *w = w.with_clock_source(ClockSource::PllXGyro))?;
//! # Ok::<(), mpu6050_regs::Error<()>>(())
//! ```

use crate::registers::{AccelConfig, Config, GyroConfig, I2cMstCtrl, PwrMgmt1, PwrMgmt2};

macro_rules! selector {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)*
                    other => Err(other),
                }
            }
        }
    };
}

selector! {
    /// Gyroscope full-scale range (`FS_SEL`)
    GyroFullScale {
        /// ±250 °/s
        Dps250 = 0,
        /// ±500 °/s
        Dps500 = 1,
        /// ±1000 °/s
        Dps1000 = 2,
        /// ±2000 °/s
        Dps2000 = 3,
    }
}

selector! {
    /// Accelerometer full-scale range (`AFS_SEL`)
    AccelFullScale {
        /// ±2g
        G2 = 0,
        /// ±4g
        G4 = 1,
        /// ±8g
        G8 = 2,
        /// ±16g
        G16 = 3,
    }
}

selector! {
    /// Digital low pass filter setting (`DLPF_CFG`)
    ///
    /// Bandwidths are accelerometer / gyroscope.
    DlpfConfig {
        /// 260 Hz / 256 Hz, gyroscope output rate 8 kHz
        Hz260 = 0,
        /// 184 Hz / 188 Hz
        Hz184 = 1,
        /// 94 Hz / 98 Hz
        Hz94 = 2,
        /// 44 Hz / 42 Hz
        Hz44 = 3,
        /// 21 Hz / 20 Hz
        Hz21 = 4,
        /// 10 Hz / 10 Hz
        Hz10 = 5,
        /// 5 Hz / 5 Hz
        Hz5 = 6,
    }
}

impl DlpfConfig {
    /// Gyroscope output rate in Hz
    ///
    /// The DLPF-disabled setting runs the gyroscope at 8 kHz, every other
    /// setting at 1 kHz.
    #[must_use]
    pub const fn gyro_output_rate_hz(self) -> u32 {
        match self {
            Self::Hz260 => 8000,
            _ => 1000,
        }
    }

    /// Sample Rate in Hz for a given `SMPLRT_DIV` value
    #[must_use]
    pub fn sample_rate_hz(self, smplrt_div: u8) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let rate = self.gyro_output_rate_hz() as f32;
        rate / (1.0 + f32::from(smplrt_div))
    }
}

selector! {
    /// FSYNC sampling location (`EXT_SYNC_SET`)
    ExtSync {
        /// FSYNC input disabled
        Disabled = 0,
        /// `TEMP_OUT_L[0]`
        TempOutL = 1,
        /// `GYRO_XOUT_L[0]`
        GyroXoutL = 2,
        /// `GYRO_YOUT_L[0]`
        GyroYoutL = 3,
        /// `GYRO_ZOUT_L[0]`
        GyroZoutL = 4,
        /// `ACCEL_XOUT_L[0]`
        AccelXoutL = 5,
        /// `ACCEL_YOUT_L[0]`
        AccelYoutL = 6,
        /// `ACCEL_ZOUT_L[0]`
        AccelZoutL = 7,
    }
}

selector! {
    /// Clock source (`CLKSEL`)
    ClockSource {
        /// Internal 8 MHz oscillator
        Internal8MHz = 0,
        /// PLL with X axis gyroscope reference
        PllXGyro = 1,
        /// PLL with Y axis gyroscope reference
        PllYGyro = 2,
        /// PLL with Z axis gyroscope reference
        PllZGyro = 3,
        /// PLL with external 32.768 kHz reference
        PllExternal32k = 4,
        /// PLL with external 19.2 MHz reference
        PllExternal19M = 5,
        /// Stop the clock and keep the timing generator in reset
        Stop = 7,
    }
}

selector! {
    /// Wake-up frequency in accelerometer-only low power mode (`LP_WAKE_CTRL`)
    WakeFrequency {
        /// 1.25 Hz
        Hz1_25 = 0,
        /// 5 Hz
        Hz5 = 1,
        /// 20 Hz
        Hz20 = 2,
        /// 40 Hz
        Hz40 = 3,
    }
}

selector! {
    /// I2C master clock (`I2C_MST_CLK`), derived from the 8 MHz internal clock
    MasterClock {
        /// 348 kHz (divider 23)
        Khz348 = 0,
        /// 333 kHz (divider 24)
        Khz333 = 1,
        /// 320 kHz (divider 25)
        Khz320 = 2,
        /// 308 kHz (divider 26)
        Khz308 = 3,
        /// 296 kHz (divider 27)
        Khz296 = 4,
        /// 286 kHz (divider 28)
        Khz286 = 5,
        /// 276 kHz (divider 29)
        Khz276 = 6,
        /// 267 kHz (divider 30)
        Khz267 = 7,
        /// 258 kHz (divider 31)
        Khz258 = 8,
        /// 500 kHz (divider 16)
        Khz500 = 9,
        /// 471 kHz (divider 17)
        Khz471 = 10,
        /// 444 kHz (divider 18)
        Khz444 = 11,
        /// 421 kHz (divider 19)
        Khz421 = 12,
        /// 400 kHz (divider 20)
        Khz400 = 13,
        /// 381 kHz (divider 21)
        Khz381 = 14,
        /// 364 kHz (divider 22)
        Khz364 = 15,
    }
}

impl GyroConfig {
    /// Full-scale range selected by `fs_sel`
    #[must_use]
    pub fn full_scale(&self) -> GyroFullScale {
        match self.fs_sel & 0x03 {
            0 => GyroFullScale::Dps250,
            1 => GyroFullScale::Dps500,
            2 => GyroFullScale::Dps1000,
            _ => GyroFullScale::Dps2000,
        }
    }

    /// Copy with a new full-scale range
    #[must_use]
    pub fn with_full_scale(self, full_scale: GyroFullScale) -> Self {
        Self {
            fs_sel: full_scale.into(),
            ..self
        }
    }
}

impl AccelConfig {
    /// Full-scale range selected by `afs_sel`
    #[must_use]
    pub fn full_scale(&self) -> AccelFullScale {
        match self.afs_sel & 0x03 {
            0 => AccelFullScale::G2,
            1 => AccelFullScale::G4,
            2 => AccelFullScale::G8,
            _ => AccelFullScale::G16,
        }
    }

    /// Copy with a new full-scale range
    #[must_use]
    pub fn with_full_scale(self, full_scale: AccelFullScale) -> Self {
        Self {
            afs_sel: full_scale.into(),
            ..self
        }
    }
}

impl Config {
    /// Filter setting, or the raw value if it is the reserved setting 7
    ///
    /// # Errors
    ///
    /// Returns the raw `dlpf_cfg` value when it names no filter setting.
    pub fn dlpf(&self) -> Result<DlpfConfig, u8> {
        DlpfConfig::try_from(self.dlpf_cfg)
    }

    /// Copy with a new filter setting
    #[must_use]
    pub fn with_dlpf(self, dlpf: DlpfConfig) -> Self {
        Self {
            dlpf_cfg: dlpf.into(),
            ..self
        }
    }

    /// FSYNC sampling location
    ///
    /// # Errors
    ///
    /// Returns the raw `ext_sync_set` value when it is out of range.
    pub fn ext_sync(&self) -> Result<ExtSync, u8> {
        ExtSync::try_from(self.ext_sync_set)
    }

    /// Copy with a new FSYNC sampling location
    #[must_use]
    pub fn with_ext_sync(self, ext_sync: ExtSync) -> Self {
        Self {
            ext_sync_set: ext_sync.into(),
            ..self
        }
    }
}

impl PwrMgmt1 {
    /// Selected clock source
    ///
    /// # Errors
    ///
    /// Returns the raw `clksel` value for the reserved setting 6.
    pub fn clock_source(&self) -> Result<ClockSource, u8> {
        ClockSource::try_from(self.clksel)
    }

    /// Copy with a new clock source
    #[must_use]
    pub fn with_clock_source(self, source: ClockSource) -> Self {
        Self {
            clksel: source.into(),
            ..self
        }
    }
}

impl PwrMgmt2 {
    /// Low power wake-up frequency
    ///
    /// # Errors
    ///
    /// Returns the raw `lp_wake_ctrl` value when it is out of range.
    pub fn wake_frequency(&self) -> Result<WakeFrequency, u8> {
        WakeFrequency::try_from(self.lp_wake_ctrl)
    }

    /// Copy with a new wake-up frequency
    #[must_use]
    pub fn with_wake_frequency(self, frequency: WakeFrequency) -> Self {
        Self {
            lp_wake_ctrl: frequency.into(),
            ..self
        }
    }
}

impl I2cMstCtrl {
    /// I2C master clock
    ///
    /// # Errors
    ///
    /// Returns the raw `i2c_mst_clk` value when it is out of range.
    pub fn master_clock(&self) -> Result<MasterClock, u8> {
        MasterClock::try_from(self.i2c_mst_clk)
    }

    /// Copy with a new master clock
    #[must_use]
    pub fn with_master_clock(self, clock: MasterClock) -> Self {
        Self {
            i2c_mst_clk: clock.into(),
            ..self
        }
    }
}
